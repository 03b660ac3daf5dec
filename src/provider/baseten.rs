//! Baseten-hosted TTS backend.
//!
//! Baseten exposes a single predict endpoint that returns the audio in the
//! response body, so only [`TtsProvider::tts`] is served. The voice is cloned
//! from reference audio supplied per call through [`BasetenOptions`].

use super::{Operation, ProviderCapabilities, ProviderOptions, TtsProvider};
use crate::context::CallContext;
use crate::transport::{resolve_api_key, AuthHeader, HttpTransport};
use crate::types::{AudioStream, CreateTtsRequest, StreamTtsRequest, TaskHandle};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::StatusCode;
use serde_json::{json, Value};

pub const DEFAULT_BASETEN_URL: &str =
    "https://model-5qeryx53.api.baseten.co/environments/production/predict";

/// Per-call voice reference for [`BasetenProvider`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasetenOptions {
    /// Base64-encoded reference audio.
    pub reference_audio: String,
    /// Locale spoken in the reference audio, e.g. `en-us`.
    pub reference_language: String,
}

impl BasetenOptions {
    pub fn new(reference_audio: impl Into<String>, reference_language: impl Into<String>) -> Self {
        Self {
            reference_audio: reference_audio.into(),
            reference_language: reference_language.into(),
        }
    }

    /// Encode raw audio file contents as the base64 reference.
    pub fn from_audio_bytes(audio: &[u8], reference_language: impl Into<String>) -> Self {
        Self::new(
            base64::engine::general_purpose::STANDARD.encode(audio),
            reference_language,
        )
    }
}

impl std::fmt::Debug for BasetenOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasetenOptions")
            .field("reference_audio_len", &self.reference_audio.len())
            .field("reference_language", &self.reference_language)
            .finish()
    }
}

/// [`TtsProvider`] that synthesizes through a Baseten deployment.
#[derive(Debug)]
pub struct BasetenProvider {
    transport: HttpTransport,
}

impl BasetenProvider {
    /// `url` is the full predict endpoint. No client-side timeout is set;
    /// bound the call with the [`CallContext`] instead.
    pub fn new(api_key: impl Into<String>, url: &str) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("baseten_provider"),
            ));
        }
        let transport = HttpTransport::new(
            url,
            AuthHeader::authorization("Api-Key", &api_key),
            None,
            "baseten_provider",
        )?;
        Ok(Self { transport })
    }

    /// Key from the keyring entry `cambai/baseten` or `BASETEN_API_KEY`,
    /// endpoint from `BASETEN_URL` or [`DEFAULT_BASETEN_URL`].
    pub fn from_env() -> Result<Self> {
        let api_key = resolve_api_key("baseten").ok_or_else(|| {
            Error::configuration_with_context(
                "API key required",
                ErrorContext::new()
                    .with_field_path("BASETEN_API_KEY")
                    .with_source("baseten_provider"),
            )
        })?;
        let url = std::env::var("BASETEN_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASETEN_URL.to_string());
        Self::new(api_key, &url)
    }

    pub fn url(&self) -> &str {
        self.transport.base_url().as_str()
    }
}

#[async_trait]
impl TtsProvider for BasetenProvider {
    fn name(&self) -> &'static str {
        "baseten"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::STREAMING_ONLY
    }

    async fn create_tts(&self, _ctx: &CallContext, _request: &CreateTtsRequest) -> Result<TaskHandle> {
        Err(Error::unsupported(self.name(), Operation::CreateTts))
    }

    async fn tts(
        &self,
        ctx: &CallContext,
        request: &StreamTtsRequest,
        options: &ProviderOptions,
    ) -> Result<AudioStream> {
        let opts = required_options(options)?;
        let payload = build_payload(request, opts);

        let resp = self.transport.post_json(ctx, "", &payload).await?;
        let resp = self
            .transport
            .check_status(ctx, resp, |s| s == StatusCode::OK)
            .await?;

        // Buffer the whole body so no connection outlives this call.
        let body = self.transport.read_bytes(ctx, resp).await?;
        tracing::debug!(bytes = body.len(), "baseten synthesis complete");
        Ok(AudioStream::from_bytes(body))
    }
}

fn required_options(options: &ProviderOptions) -> Result<&BasetenOptions> {
    let opts = match options {
        ProviderOptions::Baseten(opts) => opts,
        _ => {
            return Err(Error::configuration_with_context(
                "BasetenProvider requires BasetenOptions (reference_audio, reference_language)",
                ErrorContext::new()
                    .with_field_path("options")
                    .with_source("baseten_provider"),
            ))
        }
    };
    for (field, value) in [
        ("options.reference_audio", &opts.reference_audio),
        ("options.reference_language", &opts.reference_language),
    ] {
        if value.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "BasetenProvider requires BasetenOptions (reference_audio, reference_language)",
                ErrorContext::new()
                    .with_field_path(field)
                    .with_source("baseten_provider"),
            ));
        }
    }
    Ok(opts)
}

/// Translate the common request into Baseten's predict payload.
///
/// Only `temperature` is forwarded from the inference options.
pub(crate) fn build_payload(request: &StreamTtsRequest, opts: &BasetenOptions) -> Value {
    let mut payload = json!({
        "text": request.text,
        "stream": true,
        "output_format": request.output_format().as_str(),
        "language": request.language.code(),
        "reference_audio": opts.reference_audio,
        // Baseten deployments read either key.
        "audio_ref": opts.reference_audio,
        "reference_language": opts.reference_language,
        "apply_ner_nlp": false,
    });

    if let Some(inference) = &request.inference_options {
        if let Some(temperature) = inference.temperature {
            payload["temperature"] = json!(temperature);
        }
        let mut dropped = Vec::new();
        if inference.speaker_similarity.is_some() {
            dropped.push("speaker_similarity");
        }
        if inference.localize_speaker_weight.is_some() {
            dropped.push("localize_speaker_weight");
        }
        if !dropped.is_empty() {
            tracing::debug!(?dropped, "inference options not supported by baseten, skipping");
        }
    }

    payload
}
