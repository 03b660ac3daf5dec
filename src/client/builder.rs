use crate::client::core::CambClient;
use crate::transport::{resolve_api_key, AuthHeader, HttpTransport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://client.camb.ai/apis";

/// Builder for [`CambClient`].
///
/// Anything left unset falls back to the environment:
/// - api key: OS keyring entry `cambai/camb`, then `CAMB_API_KEY`
/// - base URL: `CAMB_BASE_URL`, then [`DEFAULT_BASE_URL`]
/// - timeout: `CAMB_HTTP_TIMEOUT_SECS`, otherwise none (the call context decides)
#[derive(Debug, Default)]
pub struct CambClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CambClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL (mock servers, staging).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<CambClient> {
        let api_key = match self.api_key {
            Some(key) if key.trim().is_empty() => {
                return Err(Error::configuration_with_context(
                    "API key must not be empty",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("camb_client"),
                ))
            }
            Some(key) => key,
            None => resolve_api_key("camb").ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("CAMB_API_KEY")
                        .with_source("camb_client"),
                )
            })?,
        };

        let base_url = self
            .base_url
            .or_else(|| std::env::var("CAMB_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = self.timeout.or_else(|| {
            std::env::var("CAMB_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        });

        let transport = HttpTransport::new(
            &base_url,
            AuthHeader::api_key("x-api-key", api_key),
            timeout,
            "camb_client",
        )?;

        Ok(CambClient {
            transport: Arc::new(transport),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = CambClientBuilder::new().api_key("  ").build().unwrap_err();
        match err {
            Error::Configuration { context, .. } => {
                assert_eq!(context.field_path.as_deref(), Some("api_key"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn explicit_base_url_is_used() {
        let client = CambClientBuilder::new()
            .api_key("k")
            .base_url("http://127.0.0.1:9/apis")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/apis");
    }
}
