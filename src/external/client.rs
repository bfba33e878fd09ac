use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::transport::{OutboundRequest, Transport};
use crate::config::HttpSettings;
use crate::error::TransportError;

/// Shared HTTP client used when no explicit settings are supplied
///
/// This client is initialized lazily on first access and reused by every
/// default [`ReqwestTransport`], so connections are pooled across clients.
///
/// # Features
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Compression**: gzip responses are decoded transparently
/// - **Security**: Uses Rustls for TLS (no OpenSSL dependency)
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_http_client(&HttpSettings::default()).expect("Failed to build HTTP client")
});

/// Builds a reqwest client from HTTP settings
pub fn build_http_client(settings: &HttpSettings) -> Result<reqwest::Client, TransportError> {
    let client = reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        // Connection pooling
        .pool_idle_timeout(Duration::from_secs(settings.pool_idle_timeout_seconds))
        .gzip(true)
        .https_only(false)
        .user_agent(settings.user_agent.as_str())
        .build()?;

    Ok(client)
}

/// [`Transport`] backed by reqwest
///
/// Returns the `reqwest::Response` exactly as received; callers decide what a
/// non-2xx status means.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing reqwest client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a dedicated client from settings
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, TransportError> {
        Ok(Self::new(build_http_client(settings)?))
    }

    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::invalid_header(name))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| TransportError::invalid_header(name))?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(HTTP_CLIENT.clone())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn post(&self, request: OutboundRequest) -> Result<reqwest::Response, TransportError> {
        let headers = Self::header_map(&request.headers)?;
        let mut builder = self.client.post(&request.url).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        Ok(builder.send().await?)
    }
}
