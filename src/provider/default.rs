use super::{ProviderCapabilities, ProviderOptions, TtsProvider};
use crate::client::CambClient;
use crate::context::CallContext;
use crate::types::{AudioStream, CreateTtsRequest, StreamTtsRequest, TaskHandle};
use crate::Result;
use async_trait::async_trait;

/// [`TtsProvider`] backed by the Camb.ai API itself.
///
/// Both operations go straight to [`CambClient`]; requests and errors pass
/// through untouched and [`ProviderOptions`] are ignored.
#[derive(Debug, Clone)]
pub struct DefaultProvider {
    client: CambClient,
}

impl DefaultProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(CambClient::new(api_key)?))
    }

    pub fn from_client(client: CambClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CambClient {
        &self.client
    }
}

#[async_trait]
impl TtsProvider for DefaultProvider {
    fn name(&self) -> &'static str {
        "camb"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::ALL
    }

    async fn create_tts(&self, ctx: &CallContext, request: &CreateTtsRequest) -> Result<TaskHandle> {
        self.client.text_to_speech().create_tts(ctx, request).await
    }

    async fn tts(
        &self,
        ctx: &CallContext,
        request: &StreamTtsRequest,
        _options: &ProviderOptions,
    ) -> Result<AudioStream> {
        self.client.text_to_speech().tts(ctx, request).await
    }
}
