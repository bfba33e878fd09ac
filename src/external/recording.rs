//! Recording transport for tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::transport::{OutboundRequest, Transport};
use crate::error::TransportError;

/// Captures every request and answers with a canned status code
#[derive(Debug)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<OutboundRequest>>,
    status: u16,
    fail: bool,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::responding_with(200)
    }

    pub(crate) fn responding_with(status: u16) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            status,
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            status: 0,
            fail: true,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<OutboundRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    type Response = u16;

    async fn post(&self, request: OutboundRequest) -> Result<u16, TransportError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(TransportError::Other(anyhow::anyhow!("connection refused")));
        }
        Ok(self.status)
    }
}
