//! `/text-to-voice*` endpoints.

use crate::context::CallContext;
use crate::transport::HttpTransport;
use crate::types::{RunId, TaskHandle, TaskId, TaskStatus, TextToVoiceRequest, TextToVoiceResult};
use crate::Result;

pub struct TextToVoice<'a> {
    transport: &'a HttpTransport,
}

impl<'a> TextToVoice<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn create_text_to_voice(
        &self,
        ctx: &CallContext,
        request: &TextToVoiceRequest,
    ) -> Result<TaskHandle> {
        let resp = self.transport.post_json(ctx, "/text-to-voice", request).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }

    pub async fn get_text_to_voice_status(&self, ctx: &CallContext, task_id: &TaskId) -> Result<TaskStatus> {
        let path = format!("/text-to-voice/{}", task_id);
        let resp = self.transport.get(ctx, &path, &[]).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }

    pub async fn get_text_to_voice_result(&self, ctx: &CallContext, run_id: RunId) -> Result<TextToVoiceResult> {
        let path = format!("/text-to-voice-result/{}", run_id);
        let resp = self.transport.get(ctx, &path, &[]).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }
}
