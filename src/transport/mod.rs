//! HTTP transport shared by the Camb.ai client and custom providers.

mod http;

pub(crate) use http::resolve_api_key;
pub use http::{AuthHeader, HttpTransport, TransportError};
