// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use qrscan::{AppError, Config};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.language, None, "Language should follow the system");
    assert_eq!(config.toast_duration_ms, 3000);
    assert!(config.max_scan_dimension > 0);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "language": "es" }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.language.as_deref(), Some("es"));
    assert_eq!(config.toast_duration_ms, Config::default().toast_duration_ms);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ language: ").unwrap();

    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        language: Some("en".to_string()),
        toast_duration_ms: 1500,
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_default_file_written_only_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qrscan").join("config.json");

    assert!(Config::write_default_if_missing(&path).unwrap());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    std::fs::write(&path, r#"{ "language": "es" }"#).unwrap();
    assert!(!Config::write_default_if_missing(&path).unwrap());
    assert_eq!(
        Config::load_from(&path).unwrap().language.as_deref(),
        Some("es")
    );
}
