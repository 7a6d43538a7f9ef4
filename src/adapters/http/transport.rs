//! reqwest-backed implementation of the gateway transport.

use async_trait::async_trait;
use url::Url;

use crate::ports::{GatewayResponse, GatewayTransport, TransportError};

/// Default transport speaking HTTP through a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Reuses an existing client (connection pool, proxy settings, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn get(&self, url: Url) -> Result<GatewayResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(GatewayResponse { status, body })
    }

    async fn post_form(
        &self,
        url: Url,
        form: &[(String, String)],
    ) -> Result<GatewayResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(GatewayResponse { status, body })
    }
}
