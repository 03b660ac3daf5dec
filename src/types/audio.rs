//! Audio formats and the audio stream returned by streaming synthesis.

use crate::{BoxStream, Error, Result};
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncRead;
use tokio::time::Instant;
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;

/// Supported audio formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
    Flac,
    Aac,
    Pcm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Aac => "aac",
            Self::Pcm => "pcm",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Flac => "audio/flac",
            Self::Aac => "audio/aac",
            Self::Pcm => "audio/pcm",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

/// Synthesized audio, delivered as a stream of byte chunks.
///
/// A buffered stream already holds the whole payload in memory and owns no
/// network resources. A live stream pulls chunks from an open response body
/// and fails with [`Error::Cancelled`] once its call's token is cancelled or
/// its call's deadline passes.
pub struct AudioStream {
    inner: Inner,
}

enum Inner {
    Buffered(Option<Bytes>),
    Live(BoxStream<'static, Bytes>),
}

impl AudioStream {
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            inner: Inner::Buffered(Some(bytes.into())),
        }
    }

    pub(crate) fn live(
        chunks: BoxStream<'static, Bytes>,
        token: CancellationToken,
        deadline: Option<Instant>,
    ) -> Self {
        Self {
            inner: Inner::Live(guard(chunks, token, deadline)),
        }
    }

    pub fn is_buffered(&self) -> bool {
        matches!(self.inner, Inner::Buffered(_))
    }

    /// Drain the stream into one contiguous buffer.
    pub async fn collect_bytes(self) -> Result<Bytes> {
        match self.inner {
            Inner::Buffered(bytes) => Ok(bytes.unwrap_or_default()),
            Inner::Live(mut chunks) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = chunks.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }

    /// Adapt into a tokio reader, e.g. for `tokio::io::copy` into a file.
    pub fn into_async_read(self) -> impl AsyncRead + Send + Unpin {
        StreamReader::new(self.map(|chunk| chunk.map_err(std::io::Error::other)))
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match &mut self.get_mut().inner {
            Inner::Buffered(bytes) => Poll::Ready(bytes.take().filter(|b| !b.is_empty()).map(Ok)),
            Inner::Live(chunks) => chunks.as_mut().poll_next(cx),
        }
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Buffered(bytes) => f
                .debug_struct("AudioStream")
                .field("buffered_len", &bytes.as_ref().map_or(0, Bytes::len))
                .finish(),
            Inner::Live(_) => f.debug_struct("AudioStream").field("live", &true).finish(),
        }
    }
}

/// Stop yielding chunks once `token` is cancelled or `deadline` passes; the
/// last item is a cancellation error so a truncated body is never mistaken
/// for a full one.
fn guard(
    chunks: BoxStream<'static, Bytes>,
    token: CancellationToken,
    deadline: Option<Instant>,
) -> BoxStream<'static, Bytes> {
    Box::pin(futures::stream::unfold(
        Some((chunks, token)),
        move |state| async move {
            let (mut chunks, token) = state?;
            let expired = async {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };
            let next = tokio::select! {
                biased;
                _ = token.cancelled() => Err("audio stream cancelled"),
                _ = expired => Err("deadline exceeded"),
                item = chunks.next() => Ok(item),
            };
            match next {
                Err(reason) => Some((Err(Error::cancelled(reason)), None)),
                Ok(None) => None,
                Ok(Some(item)) => Some((item, Some((chunks, token)))),
            }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn buffered_stream_yields_payload_once() {
        let mut stream = AudioStream::from_bytes(vec![1u8, 2, 3]);
        assert!(stream.is_buffered());
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(&first[..], &[1, 2, 3]);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn live_stream_concatenates_chunks() {
        let chunks = futures::stream::iter(vec![
            Ok::<_, Error>(Bytes::from_static(b"ab")),
            Ok(Bytes::from_static(b"cd")),
        ]);
        let stream = AudioStream::live(Box::pin(chunks), CancellationToken::new(), None);
        assert!(!stream.is_buffered());
        assert_eq!(&stream.collect_bytes().await.unwrap()[..], b"abcd");
    }

    #[tokio::test]
    async fn cancelled_live_stream_ends_with_error() {
        let token = CancellationToken::new();
        let chunks = futures::stream::iter(vec![Ok::<_, Error>(Bytes::from_static(b"ab"))])
            .chain(futures::stream::pending());
        let mut stream = AudioStream::live(Box::pin(chunks), token.clone(), None);
        assert_eq!(&stream.next().await.unwrap().unwrap()[..], b"ab");
        token.cancel();
        let err = stream.next().await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn live_stream_stops_at_deadline() {
        let chunks = futures::stream::iter(vec![Ok::<_, Error>(Bytes::from_static(b"ab"))])
            .chain(futures::stream::pending());
        let deadline = Instant::now() + std::time::Duration::from_millis(50);
        let stream = AudioStream::live(Box::pin(chunks), CancellationToken::new(), Some(deadline));
        let err = tokio::time::timeout(std::time::Duration::from_secs(2), stream.collect_bytes())
            .await
            .expect("stream ends once the deadline passes")
            .unwrap_err();
        match err {
            Error::Cancelled { reason } => assert_eq!(reason, "deadline exceeded"),
            other => panic!("expected cancellation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reader_adapter_reads_everything() {
        let mut reader = AudioStream::from_bytes(&b"payload"[..]).into_async_read();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.unwrap();
        assert_eq!(out, b"payload");
    }

    #[test]
    fn format_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AudioFormat::Mp3).unwrap(), "\"mp3\"");
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
    }
}
