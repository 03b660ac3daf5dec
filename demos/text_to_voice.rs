//! Generate voice previews from a text description.
//!
//! Usage:
//!   CAMB_API_KEY=your_key cargo run --example text_to_voice

use cambai_rust::types::{TaskStatus, TextToVoiceRequest};
use cambai_rust::{CallContext, CambClient};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

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
    let ttv = client.text_to_voice();

    println!("Generating voice...");
    let handle = ttv
        .create_text_to_voice(
            &ctx,
            &TextToVoiceRequest {
                text: "This is a sample text for voice generation.".to_string(),
                voice_description: "A calm, deep voice suitable for meditation.".to_string(),
            },
        )
        .await?;
    println!("Task started: {}", handle.task_id);

    loop {
        tokio::time::sleep(Duration::from_secs(2)).await;
        let status = match ttv.get_text_to_voice_status(&ctx, &handle.task_id).await {
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
                    let result = ttv.get_text_to_voice_result(&ctx, run_id).await?;
                    println!("Success! Generated voice previews: {:?}", result.previews);
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
