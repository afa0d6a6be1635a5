//! Configuration loading tests

use std::collections::HashMap;

use minilinker::config::{AppConfig, StorageBackend};
use tempfile::TempDir;

fn env_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.key, "shortUrls");
    assert_eq!(config.links.code_length, 6);
    assert_eq!(config.links.short_prefix, "https://");
    assert!(!config.ui.dark_mode);
    assert!(config.ui.open_on_visit);
    assert_eq!(config.ui.copied_feedback_ms, 2000);
    assert_eq!(config.ui.error_display_ms, 3000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = AppConfig::from_toml_str(
        r#"
        [links]
        code_length = 8

        [ui]
        dark_mode = true
        "#,
    )
    .unwrap();

    assert_eq!(config.links.code_length, 8);
    assert_eq!(config.links.short_prefix, "https://");
    assert!(config.ui.dark_mode);
    assert_eq!(config.ui.error_display_ms, 3000);
    assert_eq!(config.storage, AppConfig::default().storage);
}

#[test]
fn test_backend_parsing() {
    let config = AppConfig::from_toml_str("[storage]\nbackend = \"memory\"").unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!("FILE".parse::<StorageBackend>().unwrap(), StorageBackend::File);
    assert!(AppConfig::from_toml_str("[storage]\nbackend = \"redis\"").is_err());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = AppConfig::from_toml_str("[links\ncode_length = ").unwrap_err();
    assert_eq!(err.code(), "E005");
}

#[test]
fn test_env_overrides() {
    let env = env_from(&[
        ("MINILINKER_STORAGE_BACKEND", "memory"),
        ("MINILINKER_DATA_DIR", "/tmp/links"),
        ("MINILINKER_STORAGE_KEY", "urls"),
        ("MINILINKER_CODE_LENGTH", "4"),
        ("MINILINKER_SHORT_PREFIX", "https://go/"),
        ("MINILINKER_DARK_MODE", "yes"),
        ("MINILINKER_OPEN_ON_VISIT", "false"),
        ("RUST_LOG", "debug"),
        ("MINILINKER_LOG_FILE", "app.log"),
    ]);

    let mut config = AppConfig::default();
    config.override_with(|key| env.get(key).cloned());

    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.data_dir, "/tmp/links");
    assert_eq!(config.storage.key, "urls");
    assert_eq!(config.links.code_length, 4);
    assert_eq!(config.links.short_prefix, "https://go/");
    assert!(config.ui.dark_mode);
    assert!(!config.ui.open_on_visit);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "app.log");
}

#[test]
fn test_invalid_env_values_ignored() {
    let env = env_from(&[
        ("MINILINKER_CODE_LENGTH", "six"),
        ("MINILINKER_DARK_MODE", "maybe"),
        ("MINILINKER_STORAGE_BACKEND", "redis"),
        ("MINILINKER_STORAGE_KEY", ""),
    ]);

    let mut config = AppConfig::default();
    config.override_with(|key| env.get(key).cloned());
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.links.code_length = 10;
    config.ui.dark_mode = true;
    config.save_to_file(&path).unwrap();

    assert_eq!(AppConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_sample_config_parses() {
    let sample = AppConfig::generate_sample_config();
    assert!(sample.contains("[storage]"));
    assert!(sample.contains("[logging]"));
    assert_eq!(AppConfig::from_toml_str(&sample).unwrap(), AppConfig::default());
}

#[test]
fn test_resolved_data_dir() {
    let mut config = AppConfig::default();
    config.storage.data_dir = "/srv/minilinker".to_string();
    assert_eq!(
        config.storage.resolved_data_dir(),
        std::path::PathBuf::from("/srv/minilinker")
    );

    config.storage.data_dir.clear();
    assert!(config.storage.resolved_data_dir().ends_with("minilinker")
        || config.storage.resolved_data_dir().ends_with("data"));
}
