//! Response contract parsing
//!
//! Models are instructed to reply with bare JSON, but replies regularly come
//! back wrapped in a markdown code fence. The parser strips one surrounding
//! fence (language-tagged or bare), trims, and parses the remainder. Parse
//! failures are per-attempt failures: a different model in the chain may well
//! return a well-formed payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::ModelError;

/// Parse raw model output as JSON, tolerating a surrounding code fence
pub fn parse_json(raw: &str) -> Result<Value, ModelError> {
    let candidate = strip_code_fence(raw.trim());
    serde_json::from_str(candidate)
        .map_err(|err| ModelError::malformed(format!("invalid JSON: {err}")))
}

/// Parse raw model output into a typed result contract
pub fn parse_contract<T: DeserializeOwned>(raw: &str) -> Result<T, ModelError> {
    let value = parse_json(raw)?;
    serde_json::from_value(value)
        .map_err(|err| ModelError::malformed(format!("unexpected shape: {err}")))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the language tag on the opening fence line, if any
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
