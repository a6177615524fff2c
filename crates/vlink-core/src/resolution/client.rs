//! Resolution API client.

use std::time::Duration;

use crate::config::RequestDefaults;

use super::error::ResolveError;
use super::request::ResolutionRequest;
use super::response::ResolutionResponse;
use super::transport::{self, Timeouts};
use super::Resolve;

/// Everything the client needs, decided once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Resolution API or relay address. Never switched mid-session.
    pub endpoint: String,
    pub request: RequestDefaults,
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request: RequestDefaults::default(),
            timeout: Some(Duration::from_secs(10)),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Blocking client for a Cobalt-compatible `POST /api/json` endpoint.
#[derive(Debug, Clone)]
pub struct ResolutionClient {
    config: ClientConfig,
}

impl ResolutionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Sends `url` for resolution and decodes the reply. No retries.
    pub fn resolve(&self, url: &str) -> Result<ResolutionResponse, ResolveError> {
        let endpoint = self.endpoint();
        let body = ResolutionRequest::new(url, &self.config.request)
            .to_json()
            .map_err(|e| ResolveError::Protocol {
                detail: format!("encode request: {}", e),
            })?;

        tracing::debug!(endpoint, source_url = url, "resolution request");
        let timeouts = Timeouts {
            connect: self.config.connect_timeout,
            total: self.config.timeout,
        };
        let reply = transport::post_json(endpoint, &body, timeouts).map_err(|e| {
            let err = ResolveError::transport(endpoint, e);
            if let ResolveError::Transport { kind, source, .. } = &err {
                tracing::warn!(endpoint, %kind, cause = %source, "resolution transport failure");
            }
            err
        })?;

        if !reply.is_success() {
            tracing::warn!(
                endpoint,
                status = reply.status,
                body = %transport::body_preview(&reply.body),
                "resolution endpoint returned error status"
            );
            return Err(ResolveError::Http {
                status: reply.status,
            });
        }

        let response = ResolutionResponse::from_json(&reply.body).inspect_err(|e| {
            tracing::warn!(
                endpoint,
                error = %e,
                body = %transport::body_preview(&reply.body),
                "unparseable resolution response"
            );
        })?;
        tracing::info!(endpoint, status = response.status(), "resolution response");
        Ok(response)
    }
}

impl Resolve for ResolutionClient {
    fn resolve(&self, url: &str) -> Result<ResolutionResponse, ResolveError> {
        ResolutionClient::resolve(self, url)
    }

    fn endpoint(&self) -> &str {
        ResolutionClient::endpoint(self)
    }
}
