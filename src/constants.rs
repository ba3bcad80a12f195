//! Application constants
//!
//! Single source of truth for paths, endpoints, and environment names.

/// Default settings file path
pub const CONFIG_PATH: &str = "config/settings.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Primary environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Secondary environment variable checked when the primary is unset
pub const API_KEY_ENV_FALLBACK: &str = "GOOGLE_API_KEY";

/// Gemini API endpoint
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini API path (version + resource prefix)
pub const GEMINI_API_PATH: &str = "v1beta/models";

/// Prebuilt voice used for speech synthesis
pub const SYNTHESIS_VOICE: &str = "Kore";
