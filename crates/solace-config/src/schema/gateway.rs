//! Proxy gateway endpoint configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000/api/chat";

/// Where and how to reach the proxy gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Full URL of the chat endpoint (POST).
    pub url: String,
    /// TCP connect timeout in seconds (1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds. Unset means no client-side timeout;
    /// the server owns timeout policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u32>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GATEWAY_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}
