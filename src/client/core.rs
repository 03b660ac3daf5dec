use crate::client::builder::CambClientBuilder;
use crate::client::dubbing::Dubbing;
use crate::client::languages::Languages;
use crate::client::text_to_speech::TextToSpeech;
use crate::client::text_to_voice::TextToVoice;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the Camb.ai REST API.
///
/// Cheap to clone; clones share one connection pool. Endpoints are grouped
/// the way the API groups them:
///
/// ```rust,no_run
/// use cambai_rust::{CallContext, CambClient};
/// use cambai_rust::types::{CreateTtsRequest, LanguageId};
///
/// # async fn run() -> cambai_rust::Result<()> {
/// let client = CambClient::builder().api_key("your-api-key").build()?;
/// let ctx = CallContext::new();
/// let handle = client
///     .text_to_speech()
///     .create_tts(&ctx, &CreateTtsRequest::new("Hello!", 20303, LanguageId::EN_US))
///     .await?;
/// println!("task {}", handle.task_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CambClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl CambClient {
    pub fn builder() -> CambClientBuilder {
        CambClientBuilder::new()
    }

    /// Build a client from an explicit key and default settings.
    pub fn new(api_key: impl Into<String>) -> crate::Result<Self> {
        CambClientBuilder::new().api_key(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }

    pub fn text_to_speech(&self) -> TextToSpeech<'_> {
        TextToSpeech::new(&self.transport)
    }

    pub fn dubbing(&self) -> Dubbing<'_> {
        Dubbing::new(&self.transport)
    }

    pub fn text_to_voice(&self) -> TextToVoice<'_> {
        TextToVoice::new(&self.transport)
    }

    pub fn languages(&self) -> Languages<'_> {
        Languages::new(&self.transport)
    }
}
