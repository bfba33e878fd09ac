//! Transport abstraction for outbound Engagespot calls.
//!
//! The client only ever needs to POST a request with some headers and an
//! optional body, and get back whatever the HTTP stack returned. Keeping that
//! behind a trait lets tests swap in a recording transport.

use crate::error::TransportError;
use async_trait::async_trait;

/// A fully prepared POST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Absolute request URL
    pub url: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Encoded body, if any
    pub body: Option<Vec<u8>>,
}

impl OutboundRequest {
    /// Creates a request with no headers and no body
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks up the first header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// HTTP collaborator used by [`crate::Client`].
///
/// Implementations issue the request exactly once and hand the response back
/// untouched. Status codes are not interpreted; only transport-level failures
/// become errors.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// struct NullTransport;
///
/// #[async_trait]
/// impl Transport for NullTransport {
///     type Response = ();
///
///     async fn post(&self, _request: OutboundRequest) -> Result<(), TransportError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Raw response type handed back to callers
    type Response: Send;

    /// Issues a POST request
    async fn post(&self, request: OutboundRequest) -> Result<Self::Response, TransportError>;
}
