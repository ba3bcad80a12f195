// Settings: persistence, credential precedence, preference resolution

use lexicoach::{ConfigError, DEFAULT_MODEL, ModelId, Settings};
use serial_test::serial;
use std::env;
use tempfile::tempdir;

const KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

fn clear_env() {
    for var in KEY_VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
#[serial]
fn persisted_key_beats_environment() {
    clear_env();
    unsafe { env::set_var("GEMINI_API_KEY", "env-key") };

    let settings = Settings {
        api_key: Some("file-key".to_string()),
        model: None,
    };
    assert_eq!(settings.resolve_api_key().as_deref(), Some("file-key"));

    clear_env();
}

#[test]
#[serial]
fn blank_persisted_key_falls_through_to_environment() {
    clear_env();
    unsafe { env::set_var("GEMINI_API_KEY", "env-key") };

    let settings = Settings {
        api_key: Some("   ".to_string()),
        model: None,
    };
    assert_eq!(settings.resolve_api_key().as_deref(), Some("env-key"));

    clear_env();
}

#[test]
#[serial]
fn fallback_variable_used_when_primary_unset() {
    clear_env();
    unsafe { env::set_var("GOOGLE_API_KEY", "google-key") };

    let settings = Settings::default();
    assert_eq!(settings.resolve_api_key().as_deref(), Some("google-key"));

    clear_env();
}

#[test]
#[serial]
fn no_key_anywhere_resolves_to_none() {
    clear_env();
    assert_eq!(Settings::default().resolve_api_key(), None);
}

#[test]
fn unknown_persisted_model_resolves_to_default() {
    let settings = Settings {
        api_key: None,
        model: Some("gpt-4".to_string()),
    };
    assert_eq!(settings.resolve_model(), DEFAULT_MODEL);
}

#[test]
fn valid_persisted_model_resolves() {
    let settings = Settings {
        api_key: None,
        model: Some("gemini-3-pro-preview".to_string()),
    };
    assert_eq!(settings.resolve_model(), ModelId::Gemini3ProPreview);
}

#[test]
fn absent_model_resolves_to_default() {
    assert_eq!(Settings::default().resolve_model(), DEFAULT_MODEL);
}

#[test]
fn load_missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let settings = Settings::load(Some(&path)).expect("missing file is not an error");
    assert_eq!(settings, Settings::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.toml");

    let settings = Settings {
        api_key: Some("abc123".to_string()),
        model: Some("gemini-2.5-flash".to_string()),
    };
    settings.save(Some(&path)).expect("save");

    assert_eq!(Settings::load(Some(&path)).expect("load"), settings);
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "api_key = [not valid").expect("write");

    let err = Settings::load(Some(&path)).expect_err("invalid TOML");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
