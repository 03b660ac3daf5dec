//! Stream speech through a Baseten deployment behind the `TtsProvider` seam.
//!
//! Usage:
//!   BASETEN_API_KEY=your_key [BASETEN_URL=...] [REFERENCE_AUDIO=ref.wav] \
//!     cargo run --example baseten_provider

use cambai_rust::types::{StreamLanguage, StreamTtsRequest};
use cambai_rust::{BasetenOptions, BasetenProvider, CallContext, ProviderOptions, TtsProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let provider: Arc<dyn TtsProvider> = match BasetenProvider::from_env() {
        Ok(p) => Arc::new(p),
        Err(e) => {
            eprintln!("Please set BASETEN_API_KEY ({e})");
            return Ok(());
        }
    };

    println!("Using custom provider '{}'...", provider.name());

    let request = StreamTtsRequest::new(
        "Hello from a custom provider with per-call options!",
        StreamLanguage::EnUs,
    );

    let options: ProviderOptions = match std::env::var("REFERENCE_AUDIO") {
        Ok(path) => BasetenOptions::from_audio_bytes(&tokio::fs::read(&path).await?, "en-us").into(),
        Err(_) => BasetenOptions::new("UklGRi...", "en-us").into(),
    };

    let ctx = CallContext::new().with_timeout(Duration::from_secs(120));
    let stream = provider.tts(&ctx, &request, &options).await?;

    let mut out = tokio::fs::File::create("baseten-output.mp3").await?;
    tokio::io::copy(&mut stream.into_async_read(), &mut out).await?;

    println!("Success! Saved to baseten-output.mp3");
    Ok(())
}
