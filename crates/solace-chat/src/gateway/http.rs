//! `ProxyGateway` over HTTP (JSON POST).

use async_trait::async_trait;
use tracing::{debug, warn};

use super::config::HttpGatewayConfig;
use super::{ChatRequest, GatewayError, GatewayResponse, ProxyGateway};

pub struct HttpGateway {
    url: reqwest::Url,
    http: reqwest::Client,
}

impl HttpGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        let url = reqwest::Url::parse(&config.url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{}: {e}", config.url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                config.url,
                url.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Build(e.to_string()))?;

        Ok(Self { url, http })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl ProxyGateway for HttpGateway {
    async fn send(&self, request: &ChatRequest) -> Result<GatewayResponse, GatewayError> {
        debug!(url = %self.url, session_id = %request.session_id, "proxy gateway request");

        let response = self
            .http
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();

        let body = match response.text().await {
            Ok(body) => body,
            // A success whose body never arrived is as good as no response.
            Err(e) if status.is_success() => return Err(GatewayError::Transport(e.to_string())),
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "failed to read error response body");
                String::new()
            }
        };

        debug!(status = status.as_u16(), bytes = body.len(), "proxy gateway response");
        Ok(GatewayResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
