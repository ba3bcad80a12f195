//! Persisted user settings: API key and preferred model
//!
//! The settings file is optional. A missing file resolves to defaults so the
//! tutor can start before the student has configured anything; the credential
//! check happens later, at the first model call.

use super::error::ConfigError;
use crate::constants::{API_KEY_ENV, API_KEY_ENV_FALLBACK, CONFIG_PATH, ENV_PATH};
use crate::infrastructure::model::{DEFAULT_MODEL, ModelId};
use dotenvy::from_filename;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Raw settings structure for TOML (de)serialization
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

/// User settings persisted in config/settings.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl Settings {
    /// Load settings from a file path (or the default path if None).
    /// A missing file yields default settings, not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        ensure_env_loaded();
        let path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
        debug!(path = %path.display(), "Reading settings file");

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let raw: RawSettings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            api_key: raw.api_key,
            model: raw.model,
        })
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "Settings unreadable, continuing with defaults");
                Self::default()
            }
        }
    }

    /// Write settings back to a file path (or the default path if None)
    pub fn save(&self, path: Option<&Path>) -> Result<(), ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
        let raw = RawSettings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
        };
        let content =
            toml::to_string_pretty(&raw).map_err(|source| ConfigError::Serialize { source })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the API key: persisted value first, then GEMINI_API_KEY, then
    /// GOOGLE_API_KEY. Blank values count as absent. Never errors; `None`
    /// means no credential is available and callers must fail before any
    /// network attempt.
    pub fn resolve_api_key(&self) -> Option<String> {
        ensure_env_loaded();
        non_blank(self.api_key.as_deref())
            .or_else(|| non_blank(env::var(API_KEY_ENV).ok().as_deref()))
            .or_else(|| non_blank(env::var(API_KEY_ENV_FALLBACK).ok().as_deref()))
    }

    /// Resolve the preferred model, defaulting when the persisted value is
    /// absent or not in the supported set.
    pub fn resolve_model(&self) -> ModelId {
        match self.model.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_MODEL,
            Some(value) => ModelId::parse(value).unwrap_or_else(|| {
                warn!(model = value, "Unrecognized persisted model, using default");
                DEFAULT_MODEL
            }),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
