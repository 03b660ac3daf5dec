use crate::provider::Operation;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration and validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field or configuration key that caused the error (e.g., "options.reference_audio", "CAMB_API_KEY")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "baseten_provider", "camb_client")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the SDK and its providers.
///
/// Errors are returned to the immediate caller untranslated apart from the
/// context needed to diagnose them. Nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Unsupported operation: {operation} is not supported by provider '{provider}'")]
    Unsupported {
        provider: String,
        operation: Operation,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Remote error: HTTP {status} ({class}): {body}")]
    Remote {
        status: u16,
        class: String,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cancelled: {reason}")]
    Cancelled { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Map an HTTP status to a coarse error class for logs and callers.
pub(crate) fn classify_status(status: u16) -> &'static str {
    match status {
        400 | 422 => "invalid_request",
        401 => "authentication",
        402 => "payment_required",
        403 => "permission_denied",
        404 => "not_found",
        408 | 504 => "timeout",
        409 => "conflict",
        413 => "request_too_large",
        429 => "rate_limited",
        503 | 529 => "overloaded",
        500..=599 => "server_error",
        _ => "http_error",
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn unsupported(provider: impl Into<String>, operation: Operation) -> Self {
        Error::Unsupported {
            provider: provider.into(),
            operation,
        }
    }

    /// Build a remote error from a non-success response status and its raw body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Error::Remote {
            status,
            class: classify_status(status).to_string(),
            body: body.into(),
        }
    }

    pub fn cancelled(reason: impl Into<String>) -> Self {
        Error::Cancelled {
            reason: reason.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }

    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_message_carries_status_and_body() {
        let err = Error::remote(500, "rate limited");
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("rate limited"));
        assert!(msg.contains("server_error"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn status_classes() {
        assert_eq!(classify_status(429), "rate_limited");
        assert_eq!(classify_status(401), "authentication");
        assert_eq!(classify_status(503), "overloaded");
        assert_eq!(classify_status(502), "server_error");
        assert_eq!(classify_status(418), "http_error");
    }

    #[test]
    fn configuration_error_formats_context() {
        let err = Error::configuration_with_context(
            "missing reference audio",
            ErrorContext::new()
                .with_field_path("options.reference_audio")
                .with_source("baseten_provider"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: missing reference audio (field: options.reference_audio, source: baseten_provider)"
        );
        assert!(err.context().is_some());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn unsupported_error_names_operation() {
        let err = Error::unsupported("baseten", Operation::CreateTts);
        assert_eq!(
            err.to_string(),
            "Unsupported operation: create_tts is not supported by provider 'baseten'"
        );
    }
}
