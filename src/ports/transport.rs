//! Gateway transport port for network I/O.
//!
//! All HTTP traffic flows through this boundary. Calls are single-shot
//! request/response; there is no retry, timeout, or cancellation policy in
//! the core path.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors from the transport adapter.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response body not read.
    #[error("Transport request failed: {0}")]
    Request(String),
}

/// Raw gateway response: status code plus decoded body text.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    /// The gateway signals success with exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port for HTTP calls to the gateway.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, url: Url) -> Result<GatewayResponse, TransportError>;

    /// Issues a POST with a form-encoded body.
    async fn post_form(
        &self,
        url: Url,
        form: &[(String, String)],
    ) -> Result<GatewayResponse, TransportError>;
}
