//! `/tts*` endpoints.

use crate::context::CallContext;
use crate::transport::HttpTransport;
use crate::types::tts::TtsResultFileUrl;
use crate::types::{
    AudioStream, CreateTtsRequest, ResultLocator, RunId, StreamTtsRequest, TaskHandle, TaskId,
    TaskStatus, TtsResultFormat,
};
use crate::Result;

pub struct TextToSpeech<'a> {
    transport: &'a HttpTransport,
}

impl<'a> TextToSpeech<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Submit an asynchronous synthesis job. Returns as soon as the job is queued.
    pub async fn create_tts(&self, ctx: &CallContext, request: &CreateTtsRequest) -> Result<TaskHandle> {
        let resp = self.transport.post_json(ctx, "/tts", request).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }

    pub async fn get_tts_status(&self, ctx: &CallContext, task_id: &TaskId) -> Result<TaskStatus> {
        let path = format!("/tts/{}", task_id);
        let resp = self.transport.get(ctx, &path, &[]).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }

    /// Fetch the output of a finished run, as a URL or as embedded audio.
    pub async fn get_tts_result(
        &self,
        ctx: &CallContext,
        run_id: RunId,
        format: TtsResultFormat,
    ) -> Result<ResultLocator> {
        let path = format!("/tts-result/{}", run_id);
        let resp = self
            .transport
            .get(ctx, &path, &[("output_type", format.as_query())])
            .await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        match format {
            TtsResultFormat::FileUrl => {
                let out: TtsResultFileUrl = self.transport.read_json(ctx, resp).await?;
                Ok(ResultLocator::Url(out.output_url))
            }
            TtsResultFormat::RawBytes => {
                let bytes = self.transport.read_bytes(ctx, resp).await?;
                Ok(ResultLocator::Embedded(bytes))
            }
        }
    }

    /// Synthesize and stream the audio back from the response body.
    ///
    /// The returned stream reads from the open connection and stays bound to
    /// `ctx`: cancelling it mid-body ends the stream with a cancellation error.
    pub async fn tts(&self, ctx: &CallContext, request: &StreamTtsRequest) -> Result<AudioStream> {
        let resp = self.transport.post_json(ctx, "/tts-stream", request).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        Ok(self.transport.live_stream(ctx, resp))
    }
}
