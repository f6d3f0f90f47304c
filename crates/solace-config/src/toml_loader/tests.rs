//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{SolaceConfig, ThemeMode};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_solace_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        solace_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gateway]
url = "https://chat.example.com/api/chat"

[theme]
mode = "light"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gateway.url, "https://chat.example.com/api/chat");
    assert_eq!(config.theme.mode, ThemeMode::Light);
    // Defaults preserved
    assert_eq!(config.gateway.connect_timeout_secs, 10);
    assert_eq!(config.chat.greeting, "Hi! How can I help you today?");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, solace_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gateway]
url = "ftp://nope"

[chat]
greeting = "custom"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, SolaceConfig::default());
}

#[test]
fn default_template_parses_to_defaults() {
    let config: SolaceConfig = toml::from_str(template::default_config_toml()).unwrap();
    assert_eq!(config, SolaceConfig::default());
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, SolaceConfig::default());
}

#[test]
fn default_config_path_ends_with_solace() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with("solace"));
}

#[test]
fn parse_from_path_keeps_values_that_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gateway]
url = "ftp://nope"

[chat]
greeting = "Welcome back"
"#,
    )
    .unwrap();

    let raw = parse_from_path(&path).unwrap();
    assert_eq!(raw.gateway.url, "ftp://nope");
    assert_eq!(raw.chat.greeting, "Welcome back");

    let validated = load_from_path(&path).unwrap();
    assert_eq!(validated, SolaceConfig::default());
}
