//! Mock HTTP server setup for integration tests
#![allow(dead_code)]

use cambai_rust::CambClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const TEST_API_KEY: &str = "test-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Camb.ai client pointed at the mock server
    pub fn camb_client(&self) -> CambClient {
        CambClient::builder()
            .api_key(TEST_API_KEY)
            .base_url(&self.base_url)
            .build()
            .expect("client builds")
    }

    /// Full URL of a Baseten-style predict endpoint on the mock server
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Create a mock for a successful JSON response
    pub async fn mock_json(&self, method: &str, path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_header("x-api-key", TEST_API_KEY)
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock answering `POST path` with raw audio bytes
    pub async fn mock_audio(&self, path: &str, body: &[u8]) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock for an error response
    pub async fn mock_error_response(&self, method: &str, path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .with_status(status as usize)
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock on `method path` (any body) that must never be hit
    pub async fn mock_never_called(&self, method: &str, path: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_body(Matcher::Any)
            .with_status(200)
            .expect(0)
            .create_async()
            .await
    }
}

/// A server that accepts connections and never answers, for cancellation tests.
pub async fn hanging_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/predict", addr)
}

/// Server that answers every request with the raw bytes in `response`.
/// With `hold_open` the socket stays open afterwards, so a body that
/// promises more bytes stalls; otherwise the connection is closed.
pub async fn raw_response_server(response: &'static [u8], hold_open: bool) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response).await;
            let _ = socket.flush().await;
            if hold_open {
                held.push(socket);
            }
        }
    });
    format!("http://{}", addr)
}
