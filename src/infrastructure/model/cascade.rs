//! Retry/fallback cascade over the candidate model chain
//!
//! The central resilience mechanism: every task caller funnels its model call
//! through [`ModelCascade::call_with_retry`] instead of carrying its own retry
//! logic. Candidates are tried strictly in sequence, one in-flight attempt at
//! a time, and a model is never retried within one operation.

use futures::future::BoxFuture;
use tracing::{debug, info, warn};

use super::client::GeminiClient;
use super::ids::{ModelId, candidate_chain};
use super::types::{ModelError, TutorError};
use crate::config::Settings;

/// Fallback-chain caller bound to a resolved credential and an explicit model
/// preference. Both are fixed at construction; nothing is read from ambient
/// state mid-call.
#[derive(Debug, Clone)]
pub struct ModelCascade {
    api_key: Option<String>,
    preferred: ModelId,
    endpoint: Option<String>,
}

impl ModelCascade {
    pub fn new(api_key: Option<String>, preferred: ModelId) -> Self {
        Self {
            api_key: api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()),
            preferred,
            endpoint: None,
        }
    }

    /// Resolve credential and preference from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.resolve_api_key(), settings.resolve_model())
    }

    /// Override the API endpoint (proxies, tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the preferred model for this cascade
    pub fn with_preferred(mut self, preferred: ModelId) -> Self {
        self.preferred = preferred;
        self
    }

    pub fn preferred(&self) -> ModelId {
        self.preferred
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Run `attempt` against each candidate model until one succeeds.
    ///
    /// A fresh client is constructed per attempt. The first success returns
    /// immediately; each failure is recorded and the next candidate tried.
    /// With no credential the call fails before any attempt is dispatched.
    pub async fn call_with_retry<T, F>(&self, operation: &str, mut attempt: F) -> Result<T, TutorError>
    where
        F: FnMut(ModelId, GeminiClient) -> BoxFuture<'static, Result<T, ModelError>>,
    {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!(operation, "No API key available, refusing to dispatch");
            return Err(TutorError::MissingApiKey);
        };

        let chain = candidate_chain(self.preferred);
        let mut attempts = 0usize;
        let mut last_error: Option<ModelError> = None;

        for model in chain {
            let client = match &self.endpoint {
                Some(endpoint) => GeminiClient::with_endpoint(endpoint.as_str(), api_key),
                None => GeminiClient::new(api_key),
            };

            debug!(operation, model = model.as_str(), "Dispatching attempt");
            attempts += 1;

            match attempt(model, client).await {
                Ok(value) => {
                    info!(operation, model = model.as_str(), attempts, "Operation succeeded");
                    return Ok(value);
                }
                Err(err) => {
                    warn!(
                        operation,
                        model = model.as_str(),
                        error = %err,
                        "Model attempt failed, trying next candidate"
                    );
                    last_error = Some(err);
                }
            }
        }

        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no candidate models configured".to_string());
        Err(TutorError::Exhausted {
            operation: operation.to_string(),
            attempts,
            last_error,
        })
    }
}
