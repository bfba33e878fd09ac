//! Errors surfaced by the HTTP transport collaborator

use thiserror::Error;

/// Failures raised while issuing an outbound request.
///
/// These are propagated unmodified to the caller; nothing in this crate
/// retries or classifies them further.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request failed inside reqwest (DNS, connect, TLS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A header name or value could not be put on the wire
    #[error("Invalid header: {name}")]
    InvalidHeader { name: String },

    /// Failure from a custom transport implementation
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    pub fn invalid_header(name: impl Into<String>) -> Self {
        Self::InvalidHeader { name: name.into() }
    }
}
