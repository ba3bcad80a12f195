//! Model error types: per-attempt failures and the errors surfaced to callers

use thiserror::Error;

/// Failure of one model attempt. Consumed inside the cascade loop; never
/// surfaced to the UI layer individually.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error calling model '{model}': {source}")]
    Network {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("model '{model}' returned an unusable response: {reason}")]
    InvalidResponse { model: String, reason: String },
    #[error("malformed model payload: {reason}")]
    MalformedResponse { reason: String },
}

impl ModelError {
    pub fn network(model: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            model: model.into(),
            source,
        }
    }

    pub fn invalid_response(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            model: model.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}

/// Errors a task caller propagates to the caller of the library
#[derive(Debug, Error)]
pub enum TutorError {
    #[error(
        "no Gemini API key is configured; save one with `lexicoach set-key` or set GEMINI_API_KEY"
    )]
    MissingApiKey,

    #[error("{operation} failed after {attempts} model attempts: {last_error}")]
    Exhausted {
        operation: String,
        attempts: usize,
        last_error: String,
    },
}
