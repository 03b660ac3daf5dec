//! End-to-end dubbing of a sample video from English to French.
//!
//! Usage:
//!   CAMB_API_KEY=your_key cargo run --example dubbing

use cambai_rust::client::find_by_short_name;
use cambai_rust::types::{DubbingRequest, LanguageId, TaskStatus};
use cambai_rust::{CallContext, CambClient};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const VIDEO_URL: &str =
    "https://github.com/Camb-ai/cambai-python-sdk/raw/main/tests/data/test_video.mp4";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::var("CAMB_API_KEY").is_err() {
        eprintln!("Please set CAMB_API_KEY");
        return Ok(());
    }

    let client = CambClient::builder().build()?;
    let ctx = CallContext::new();

    // Listing failures are not fatal; fall back to well-known ids.
    let languages = client.languages();
    let source = languages.source_languages(&ctx).await.unwrap_or_default();
    let target = languages.target_languages(&ctx).await.unwrap_or_default();
    let source_id = find_by_short_name(&source, "en-us")
        .map(|l| l.id)
        .unwrap_or(LanguageId(1));
    let target_id = find_by_short_name(&target, "fr-fr")
        .map(|l| l.id)
        .unwrap_or(LanguageId(2));

    println!("Starting dubbing task...");
    let dub = client.dubbing();
    let handle = dub
        .end_to_end_dubbing(&ctx, &DubbingRequest::new(VIDEO_URL, source_id, vec![target_id]))
        .await?;
    println!("Dubbing task started: {}", handle.task_id);

    loop {
        tokio::time::sleep(Duration::from_secs(5)).await;
        let status = match dub.get_dubbing_status(&ctx, &handle.task_id).await {
            Ok(status) => status,
            Err(e) => {
                println!("Error polling: {e}");
                continue;
            }
        };
        println!("Status: {status:?}");

        match status {
            TaskStatus::Pending => {}
            TaskStatus::Success { run_id } => {
                if let Some(run_id) = run_id {
                    let result = dub.get_dubbed_run_info(&ctx, run_id).await?;
                    match result.video_url {
                        Some(url) => println!("Success! Video URL: {url}"),
                        None => println!("Success, but no video URL found in result."),
                    }
                }
                break;
            }
            TaskStatus::Error { reason } => {
                println!("Task failed: {reason}");
                break;
            }
        }
    }

    Ok(())
}
