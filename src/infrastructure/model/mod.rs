//! Model infrastructure: Gemini client, candidate chain, fallback cascade

pub mod cascade;
pub mod client;
pub mod ids;
pub mod parser;
pub mod types;

pub use cascade::ModelCascade;
pub use client::{GeminiClient, GenerateRequest, Part};
pub use ids::{DEFAULT_MODEL, FALLBACK_ORDER, ModelId, SUPPORTED_MODELS, candidate_chain};
pub use parser::{parse_contract, parse_json};
pub use types::{ModelError, TutorError};
