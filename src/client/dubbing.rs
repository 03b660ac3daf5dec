//! `/end_to_end_dubbing` and `/dubbed_run_info` endpoints.

use crate::context::CallContext;
use crate::transport::HttpTransport;
use crate::types::{DubbingRequest, DubbingResult, RunId, TaskHandle, TaskId, TaskStatus};
use crate::Result;

pub struct Dubbing<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Dubbing<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn end_to_end_dubbing(&self, ctx: &CallContext, request: &DubbingRequest) -> Result<TaskHandle> {
        let resp = self
            .transport
            .post_json(ctx, "/end_to_end_dubbing", request)
            .await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }

    pub async fn get_dubbing_status(&self, ctx: &CallContext, task_id: &TaskId) -> Result<TaskStatus> {
        let path = format!("/end_to_end_dubbing/{}", task_id);
        let resp = self.transport.get(ctx, &path, &[]).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }

    pub async fn get_dubbed_run_info(&self, ctx: &CallContext, run_id: RunId) -> Result<DubbingResult> {
        let path = format!("/dubbed_run_info/{}", run_id);
        let resp = self.transport.get(ctx, &path, &[]).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }
}
