//! Submit a TTS job, poll until it finishes, print the audio URL.
//!
//! Usage:
//!   CAMB_API_KEY=your_key cargo run --example basic_tts

use cambai_rust::types::{CreateTtsRequest, LanguageId, ResultLocator, TaskStatus, TtsResultFormat};
use cambai_rust::{CallContext, CambClient};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::var("CAMB_API_KEY").is_err() {
        eprintln!("Please set CAMB_API_KEY environment variable");
        return Ok(());
    }

    let client = CambClient::builder().build()?;
    let ctx = CallContext::new();
    let tts = client.text_to_speech();

    println!("Sending TTS request...");
    let handle = tts
        .create_tts(
            &ctx,
            &CreateTtsRequest::new("Hello from the Rust SDK!", 20303, LanguageId::EN_US),
        )
        .await?;
    println!("TTS task created: {}", handle.task_id);

    loop {
        tokio::time::sleep(Duration::from_secs(2)).await;
        let status = match tts.get_tts_status(&ctx, &handle.task_id).await {
            Ok(status) => status,
            Err(e) => {
                println!("Error polling: {e}");
                continue;
            }
        };

        match status {
            TaskStatus::Pending => println!("Status: pending"),
            TaskStatus::Success { run_id: Some(run_id) } => {
                match tts.get_tts_result(&ctx, run_id, TtsResultFormat::FileUrl).await? {
                    ResultLocator::Url(url) => println!("Success! Audio URL: {url}"),
                    ResultLocator::Embedded(bytes) => println!("Success! {} bytes of audio", bytes.len()),
                }
                break;
            }
            TaskStatus::Success { run_id: None } => {
                println!("Success, but no run id was returned.");
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
