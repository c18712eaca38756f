//! Error types for the remote client crate.

use thiserror::Error;

/// Errors returned by a [`GenerativeClient`](crate::GenerativeClient).
///
/// Every variant is recoverable: callers substitute built-in results.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No remote service is configured or offline mode was requested.
    #[error("Remote service unavailable: {0}")]
    Unavailable(String),

    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response carried no usable text.
    #[error("Empty response")]
    Empty,

    /// A field parsed but its value is out of bounds.
    #[error("Implausible {field} in response: {value}")]
    Implausible { field: &'static str, value: String },
}

impl ClientError {
    /// True when the client never attempted a network call
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
