//! Full configuration validation.
//!
//! Collects every violation instead of stopping at the first one.

use std::sync::OnceLock;

use regex::Regex;
use solace_common::ConfigError;

use crate::schema::SolaceConfig;

fn http_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://[^\s/]+(/\S*)?$").expect("static regex"))
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SolaceConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Gateway
    if !http_url_pattern().is_match(config.gateway.url.trim()) {
        errors.push(format!(
            "gateway.url = {:?} is not an http(s) URL",
            config.gateway.url
        ));
    }
    validate_range(
        &mut errors,
        "gateway.connect_timeout_secs",
        config.gateway.connect_timeout_secs,
        1,
        120,
    );
    if let Some(secs) = config.gateway.request_timeout_secs {
        validate_range(&mut errors, "gateway.request_timeout_secs", secs, 1, 3600);
    }

    // Chat
    if config.chat.greeting.trim().is_empty() {
        errors.push("chat.greeting must not be empty".into());
    }
    validate_range(
        &mut errors,
        "chat.max_input_chars",
        config.chat.max_input_chars,
        1,
        65536,
    );

    // Logging
    if !matches!(
        config.logging.level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    ) {
        errors.push(format!(
            "logging.level = {:?} is not a known level",
            config.logging.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
