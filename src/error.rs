//! Error types for ManyChat API operations.

use thiserror::Error;

/// Errors that can occur during ManyChat API operations.
#[derive(Debug, Error)]
pub enum ManyChatError {
    /// Client configuration is invalid.
    #[error("ManyChat client configuration error: {0}")]
    Config(String),

    /// HTTP transport error (connection failure, timeout, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API endpoint does not exist (HTTP 404).
    #[error("404 Not Found: {path}")]
    NotFound { path: String },

    /// The API answered with a non-2xx HTTP status other than 404.
    #[error("calling method {path} failed with HTTP status {status}")]
    Status { path: String, status: u16 },

    /// The response body could not be parsed as a JSON object.
    #[error("couldn't parse response JSON for method {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API returned a well-formed envelope with a non-success status.
    #[error(
        "calling method {path} didn't succeed{}",
        .message.as_deref().map(|m| format!(", error message: {m}")).unwrap_or_default()
    )]
    CallFailed {
        path: String,
        message: Option<String>,
    },

    /// Base URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for ManyChat operations.
pub type Result<T> = core::result::Result<T, ManyChatError>;

impl ManyChatError {
    /// Vendor-provided error message, when the failure carries one.
    pub fn vendor_message(&self) -> Option<&str> {
        match self {
            Self::CallFailed { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
