//! Configuration schema types for Solace.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod gateway;
mod logging;
mod theme;

pub use chat::*;
pub use gateway::*;
pub use logging::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Solace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub gateway: GatewayConfig,
    pub chat: ChatConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: SolaceConfig = toml::from_str("").unwrap();
        assert_eq!(config, SolaceConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: SolaceConfig = toml::from_str(
            r#"
[gateway]
connect_timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(config.gateway.connect_timeout_secs, 3);
        assert_eq!(config.gateway.url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.gateway.request_timeout_secs, None);
        assert_eq!(config.chat.max_input_chars, 1024);
    }

    #[test]
    fn theme_mode_parses_lowercase() {
        let config: SolaceConfig = toml::from_str(
            r#"
[theme]
mode = "light"
"#,
        )
        .unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Light);
    }
}
