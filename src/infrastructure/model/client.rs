//! Gemini client implementation

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::ids::ModelId;
use super::types::ModelError;
use crate::constants::{GEMINI_API_PATH, GEMINI_ENDPOINT};
use crate::domain::types::AudioClip;

/// One content part of a request payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineData { mime_type: String, data: String },
}

impl Part {
    pub fn text(value: impl Into<String>) -> Self {
        Part::Text(value.into())
    }

    /// Encode recorded audio into an inline-data part
    pub fn audio(clip: &AudioClip) -> Self {
        Part::InlineData {
            mime_type: clip.mime_type.clone(),
            data: BASE64.encode(&clip.data),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Part::Text(text) => json!({"text": text}),
            Part::InlineData { mime_type, data } => json!({
                "inlineData": {"mimeType": mime_type, "data": data}
            }),
        }
    }
}

/// Prompt parts plus the system instruction for one generate call.
/// Built per call and not retained after the call completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub system: Option<String>,
    pub parts: Vec<Part>,
}

impl GenerateRequest {
    pub fn new(system: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            system: Some(system.into()),
            parts,
        }
    }

    pub fn text(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(system, vec![Part::text(prompt)])
    }
}

/// Gemini client bound to one API key. Constructed fresh per attempt; the
/// cascade never reuses a handle across attempts.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(GEMINI_ENDPOINT, api_key)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn model_url(&self, model: ModelId) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{GEMINI_API_PATH}/{}:generateContent", model.as_str())
    }

    /// Request a JSON-shaped text completion
    pub async fn generate_json(
        &self,
        model: ModelId,
        request: &GenerateRequest,
    ) -> Result<String, ModelError> {
        let parts: Vec<Value> = request.parts.iter().map(Part::to_value).collect();
        let mut payload = json!({
            "contents": [{"role": "user", "parts": parts}],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        });

        if let Some(system) = &request.system {
            payload["system_instruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        info!(
            model = model.as_str(),
            parts = request.parts.len(),
            "Sending generate request to Gemini"
        );

        let response = self.post(model, &payload).await?;
        debug!("Received response from Gemini");

        response
            .first_text()
            .ok_or_else(|| ModelError::invalid_response(model.as_str(), "missing text part"))
    }

    /// Request audio-modality output for the given text. Returns the base64
    /// payload as sent by the API.
    pub async fn generate_audio(
        &self,
        model: ModelId,
        text: &str,
        voice: &str,
    ) -> Result<String, ModelError> {
        let payload = json!({
            "contents": [{"role": "user", "parts": [{"text": text}]}],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": {"voiceName": voice}
                    }
                }
            }
        });

        info!(
            model = model.as_str(),
            voice, "Sending synthesis request to Gemini"
        );

        let response = self.post(model, &payload).await?;
        debug!("Received audio response from Gemini");

        response
            .first_audio()
            .ok_or_else(|| ModelError::invalid_response(model.as_str(), "missing audio part"))
    }

    async fn post(
        &self,
        model: ModelId,
        payload: &Value,
    ) -> Result<GenerateContentResponse, ModelError> {
        let url = format!("{}?key={}", self.model_url(model), self.api_key);

        self.http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ModelError::network(model.as_str(), e))?
            .error_for_status()
            .map_err(|e| ModelError::network(model.as_str(), e))?
            .json()
            .await
            .map_err(|e| ModelError::network(model.as_str(), e))
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
    }

    fn first_audio(self) -> Option<String> {
        self.candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.inline_data.map(|d| d.data))
    }
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Deserialize)]
struct GeminiInlineData {
    data: String,
}
