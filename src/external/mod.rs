//! HTTP plumbing for talking to the Engagespot REST API

pub mod client;
pub mod transport;

#[cfg(test)]
pub(crate) mod recording;

pub use client::{HTTP_CLIENT, ReqwestTransport, build_http_client};
pub use transport::{OutboundRequest, Transport};
