//! Pluggable TTS backends.
//!
//! [`TtsProvider`] is the seam between callers and a synthesis backend. The
//! [`DefaultProvider`] forwards to [`CambClient`](crate::CambClient); other
//! providers may implement only part of the interface and say so through
//! [`TtsProvider::capabilities`].

#[cfg(feature = "baseten")]
pub mod baseten;
mod default;

#[cfg(feature = "baseten")]
pub use baseten::{BasetenOptions, BasetenProvider, DEFAULT_BASETEN_URL};
pub use default::DefaultProvider;

use crate::context::CallContext;
use crate::types::{AudioStream, CreateTtsRequest, StreamTtsRequest, TaskHandle};
use crate::Result;
use async_trait::async_trait;
use std::fmt;

/// The operations of [`TtsProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Asynchronous job submission ([`TtsProvider::create_tts`]).
    CreateTts,
    /// Streaming synthesis ([`TtsProvider::tts`]).
    Tts,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::CreateTts => "create_tts",
            Operation::Tts => "tts",
        })
    }
}

/// Which operations a provider implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCapabilities {
    pub create_tts: bool,
    pub tts: bool,
}

impl ProviderCapabilities {
    pub const ALL: ProviderCapabilities = ProviderCapabilities {
        create_tts: true,
        tts: true,
    };

    pub const STREAMING_ONLY: ProviderCapabilities = ProviderCapabilities {
        create_tts: false,
        tts: true,
    };

    pub fn supports(&self, op: Operation) -> bool {
        match op {
            Operation::CreateTts => self.create_tts,
            Operation::Tts => self.tts,
        }
    }
}

/// Provider-specific inputs that the common request types do not carry.
///
/// Passed next to the request so that a provider's extra requirements are
/// visible at the call site. Providers that need options reject calls
/// without them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderOptions {
    #[default]
    None,
    #[cfg(feature = "baseten")]
    Baseten(BasetenOptions),
}

#[cfg(feature = "baseten")]
impl From<BasetenOptions> for ProviderOptions {
    fn from(opts: BasetenOptions) -> Self {
        ProviderOptions::Baseten(opts)
    }
}

/// A text-to-speech backend.
///
/// Each operation commits to one result shape: `create_tts` hands back a
/// task to poll, `tts` hands back the audio itself. A provider that cannot
/// serve an operation reports it in [`capabilities`](Self::capabilities) and
/// fails the call with [`Error::Unsupported`](crate::Error::Unsupported)
/// without touching the network.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> ProviderCapabilities;

    fn supports(&self, op: Operation) -> bool {
        self.capabilities().supports(op)
    }

    /// Submit an asynchronous synthesis job and return its task handle
    /// without waiting for completion.
    async fn create_tts(&self, ctx: &CallContext, request: &CreateTtsRequest) -> Result<TaskHandle>;

    /// Synthesize `request` and return the finished audio.
    ///
    /// A non-success backend status fails with
    /// [`Error::Remote`](crate::Error::Remote) carrying code and body.
    async fn tts(
        &self,
        ctx: &CallContext,
        request: &StreamTtsRequest,
        options: &ProviderOptions,
    ) -> Result<AudioStream>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_sets() {
        assert!(ProviderCapabilities::ALL.supports(Operation::CreateTts));
        assert!(ProviderCapabilities::ALL.supports(Operation::Tts));
        assert!(!ProviderCapabilities::STREAMING_ONLY.supports(Operation::CreateTts));
        assert!(ProviderCapabilities::STREAMING_ONLY.supports(Operation::Tts));
    }

    #[test]
    fn operation_names() {
        assert_eq!(Operation::CreateTts.to_string(), "create_tts");
        assert_eq!(Operation::Tts.to_string(), "tts");
    }
}
