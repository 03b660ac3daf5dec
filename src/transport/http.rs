use crate::context::CallContext;
use crate::types::AudioStream;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use keyring::Entry;
use reqwest::{Proxy, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use url::Url;

/// Header carrying the credential for one backend.
#[derive(Clone)]
pub struct AuthHeader {
    name: &'static str,
    value: String,
}

impl AuthHeader {
    /// Raw key in a dedicated header, e.g. `x-api-key: <key>`.
    pub fn api_key(name: &'static str, key: impl Into<String>) -> Self {
        Self {
            name,
            value: key.into(),
        }
    }

    /// `Authorization: <scheme> <key>`, e.g. `Authorization: Api-Key <key>`.
    pub fn authorization(scheme: &str, key: &str) -> Self {
        Self {
            name: "Authorization",
            value: format!("{} {}", scheme, key),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeader")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    auth: AuthHeader,
    source: &'static str,
}

impl HttpTransport {
    /// Build a transport for `base_url`.
    ///
    /// `timeout` is a whole-request client timeout; `None` leaves timing
    /// entirely to the caller's [`CallContext`]. `source` names the owner in
    /// logs and error context.
    ///
    /// `CAMB_HTTP_POOL_MAX_IDLE_PER_HOST`, `CAMB_HTTP_POOL_IDLE_TIMEOUT_SECS`
    /// and `CAMB_PROXY_URL` tune every transport built here, the Baseten one
    /// included.
    pub fn new(
        base_url: &str,
        auth: AuthHeader,
        timeout: Option<Duration>,
        source: &'static str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint URL '{}': {}", base_url, e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source(source),
            )
        })?;

        // Minimal production-friendly defaults (env-overridable).
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(
                env::var("CAMB_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("CAMB_HTTP_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Ok(proxy_url) = env::var("CAMB_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url,
            auth,
            source,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for `path`; an empty path targets the base URL itself.
    fn endpoint(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST `body` as JSON. The body is encoded up front so encoding
    /// failures surface as [`Error::Serialization`].
    pub async fn post_json<B>(&self, ctx: &CallContext, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        let req = self
            .client
            .post(self.endpoint(path))
            .header("Content-Type", "application/json")
            .body(payload);
        self.execute(ctx, req).await
    }

    pub async fn get(
        &self,
        ctx: &CallContext,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let mut req = self.client.get(self.endpoint(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        self.execute(ctx, req).await
    }

    /// Send one request under `ctx`, without any status check.
    pub async fn execute(&self, ctx: &CallContext, req: RequestBuilder) -> Result<Response> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let req = req
            .header(self.auth.name, &self.auth.value)
            .header("x-request-id", &request_id);

        tracing::debug!(source = self.source, request_id = %request_id, "sending request");
        let resp = ctx
            .run(async { req.send().await.map_err(transport_error) })
            .await?;
        tracing::debug!(
            source = self.source,
            request_id = %request_id,
            status = resp.status().as_u16(),
            "response received"
        );
        Ok(resp)
    }

    /// Turn a response whose status fails `accept` into [`Error::Remote`]
    /// carrying the status code and raw body text.
    pub async fn check_status(
        &self,
        ctx: &CallContext,
        resp: Response,
        accept: impl Fn(StatusCode) -> bool,
    ) -> Result<Response> {
        let status = resp.status();
        if accept(status) {
            return Ok(resp);
        }
        let body = ctx
            .run(async { resp.text().await.map_err(transport_error) })
            .await?;
        tracing::warn!(
            source = self.source,
            status = status.as_u16(),
            "remote returned non-success status"
        );
        Err(Error::remote(status.as_u16(), body))
    }

    /// Buffer the full body; the connection is released once this returns.
    pub async fn read_bytes(&self, ctx: &CallContext, resp: Response) -> Result<Bytes> {
        ctx.run(async { resp.bytes().await.map_err(transport_error) })
            .await
    }

    pub async fn read_json<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        resp: Response,
    ) -> Result<T> {
        let bytes = self.read_bytes(ctx, resp).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Expose the body as a live stream that stays bound to `ctx`'s token
    /// and deadline.
    pub fn live_stream(&self, ctx: &CallContext, resp: Response) -> AudioStream {
        let chunks = resp.bytes_stream().map_err(transport_error);
        AudioStream::live(Box::pin(chunks), ctx.token().clone(), ctx.deadline())
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    Error::Transport(TransportError::Http(e))
}

/// Look up an API key for `provider_id`: OS keyring first, then
/// `<PROVIDER_ID>_API_KEY` from the environment.
pub(crate) fn resolve_api_key(provider_id: &str) -> Option<String> {
    // 1. Try Keyring
    let entry = Entry::new("cambai", provider_id).ok();
    if let Some(entry) = entry {
        if let Ok(key) = entry.get_password() {
            return Some(key);
        }
    }

    // 2. Try Environment Variable (PROVIDER_API_KEY)
    let env_var = format!("{}_API_KEY", provider_id.to_uppercase());
    env::var(env_var).ok().filter(|k| !k.trim().is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
