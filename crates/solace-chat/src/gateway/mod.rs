//! Proxy gateway boundary.
//!
//! The gateway relays `{ query, session_id }` to the inference backend and
//! returns whatever HTTP response it got. Interpreting that response is the
//! controller's job; a gateway only fails when no response arrived at all.

mod config;
mod http;


use async_trait::async_trait;
use serde::Serialize;
use solace_common::SessionToken;

pub use config::HttpGatewayConfig;
pub use http::HttpGateway;

#[async_trait]
pub trait ProxyGateway: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<GatewayResponse, GatewayError>;
}

/// Request payload. The gateway never sees the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub query: String,
    pub session_id: SessionToken,
}

/// Raw response from the gateway, any status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl GatewayResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    /// Build a response whose body is `value` serialized as JSON.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No response was received.
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid gateway url: {0}")]
    InvalidUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl From<GatewayError> for solace_common::SolaceError {
    fn from(e: GatewayError) -> Self {
        solace_common::SolaceError::Gateway(e.to_string())
    }
}
