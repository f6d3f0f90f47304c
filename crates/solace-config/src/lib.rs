//! Solace configuration system.
//!
//! TOML-based configuration for the chat client: gateway endpoint, chat
//! behaviour, theme preference and logging. All sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use solace_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.gateway.url);
//! ```

pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::SolaceConfig;
pub use theme::ThemePreference;
pub use toml_writer::save_config_to_path;

use solace_common::ConfigError;
use std::path::Path;

/// Environment variable overriding `gateway.url`.
pub const GATEWAY_URL_ENV: &str = "SOLACE_GATEWAY_URL";

/// Load config from the platform default path and apply env overrides.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<SolaceConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and apply env overrides.
pub fn load_config_from(path: &Path) -> Result<SolaceConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Apply environment variable overrides on top of file values.
pub fn apply_env_overrides(config: &mut SolaceConfig) {
    if let Ok(url) = std::env::var(GATEWAY_URL_ENV) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::debug!(url, "gateway url overridden from environment");
            config.gateway.url = url.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[chat]
greeting = "Hello there"
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.chat.greeting, "Hello there");
    }
}
