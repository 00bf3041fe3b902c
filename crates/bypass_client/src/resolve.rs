use std::time::Duration;

use crate::wire::{BypassRequest, BypassResponse, ErrorBody};
use crate::{Resolution, ResolveError};

/// Endpoint the service listens on out of the box.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/bypass";

/// Connection settings for the resolution service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Full endpoint URL, e.g. `http://localhost:4000/api/bypass`.
    pub endpoint: String,
    /// No timeout unless configured: a hung service keeps the exchange
    /// pending and the form locked.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, url: &str) -> Result<Resolution, ResolveError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestResolver {
    settings: ClientSettings,
}

impl ReqwestResolver {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ResolveError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Resolver for ReqwestResolver {
    async fn resolve(&self, url: &str) -> Result<Resolution, ResolveError> {
        let client = self.build_client()?;

        let response = client
            .post(&self.settings.endpoint)
            .json(&BypassRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The failure body is best-effort JSON; a missing or
            // unparseable `error` field means the caller falls back to the
            // generic message.
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(ResolveError::Service {
                status: status.as_u16(),
                message: body.error,
            });
        }

        let body = response
            .json::<BypassResponse>()
            .await
            .map_err(map_reqwest_error)?;
        Ok(body.into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ResolveError {
    ResolveError::Transport {
        detail: err.to_string(),
    }
}
