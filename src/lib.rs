//! # cambai-rust
//!
//! Rust client for the Camb.ai text-to-speech, dubbing and voice generation
//! API, with a pluggable [`TtsProvider`] layer so synthesis can be served by
//! another backend behind the same interface.
//!
//! ## Overview
//!
//! - **Vendor client**: [`CambClient`] wraps the REST endpoints (TTS jobs,
//!   streaming TTS, dubbing, text-to-voice, language listings).
//! - **Providers**: [`TtsProvider`] has two operations, asynchronous job
//!   creation and streaming synthesis. [`DefaultProvider`] forwards both to
//!   [`CambClient`]; `BasetenProvider` (feature `baseten`) serves streaming
//!   only and rejects the other operation.
//! - **Cancellation**: every call takes a [`CallContext`]; cancelling it or
//!   letting its deadline pass aborts the in-flight request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cambai_rust::{CallContext, DefaultProvider, ProviderOptions, TtsProvider};
//! use cambai_rust::types::{StreamLanguage, StreamTtsRequest};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> cambai_rust::Result<()> {
//!     let provider = DefaultProvider::new("your-api-key")?;
//!     let ctx = CallContext::new().with_timeout(Duration::from_secs(60));
//!
//!     let request = StreamTtsRequest::new("Hello!", StreamLanguage::EnUs).voice_id(20303);
//!     let audio = provider
//!         .tts(&ctx, &request, &ProviderOptions::None)
//!         .await?
//!         .collect_bytes()
//!         .await?;
//!     std::fs::write("hello.mp3", &audio)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`provider`] | `TtsProvider` trait and its implementations |
//! | [`client`] | Camb.ai API client and builder |
//! | [`types`] | Request/response model, languages, task status, audio stream |
//! | [`context`] | Per-call cancellation and deadlines |
//! | [`transport`] | Shared HTTP transport |

pub mod client;
pub mod context;
pub mod provider;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{CambClient, CambClientBuilder};
pub use context::CallContext;
pub use provider::{
    DefaultProvider, Operation, ProviderCapabilities, ProviderOptions, TtsProvider,
};
pub use types::{AudioStream, TaskHandle, TaskStatus};

#[cfg(feature = "baseten")]
pub use provider::{BasetenOptions, BasetenProvider};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed, sendable stream of `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
