//! In-memory transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::ports::{GatewayResponse, GatewayTransport, TransportError};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: Url,
    pub form: Vec<(String, String)>,
}

/// Transport that records requests and replays queued responses.
///
/// Responses are consumed in FIFO order; when the queue is empty a
/// `200` with an empty body is returned.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<GatewayResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for a future request.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(GatewayResponse { status, body: body.into() });
    }

    /// All requests recorded so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> GatewayResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(GatewayResponse { status: 200, body: String::new() })
    }
}

#[async_trait]
impl GatewayTransport for MockTransport {
    async fn get(&self, url: Url) -> Result<GatewayResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "GET",
            url,
            form: Vec::new(),
        });
        Ok(self.next_response())
    }

    async fn post_form(
        &self,
        url: Url,
        form: &[(String, String)],
    ) -> Result<GatewayResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "POST",
            url,
            form: form.to_vec(),
        });
        Ok(self.next_response())
    }
}
