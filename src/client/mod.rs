//! Merchant-facing gateway client.
//!
//! [`Robokassa`] ties the configuration, the signature engine and a
//! pluggable transport together. Payment links and callback checks are pure
//! and synchronous; SMS dispatch, recurring charges and the informational
//! webservice go over the transport.
//!
//! # Example
//!
//! ```no_run
//! use robokassa::{ClientConfig, CredentialSet, PaymentLink, Robokassa};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new(CredentialSet::live("myshop", "pwd1", "pwd2"));
//! let client = Robokassa::new(config)?;
//!
//! let link = PaymentLink::new(42, "100.00", "Order #42")
//!     .with_custom_field("Shp_user", "alice");
//! let url = client.payment_url(&link)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod recurring;
mod sms;
mod webservice;

pub use error::ClientError;
pub use sms::MAX_SMS_CHARS;
pub use webservice::Language;

use std::sync::Arc;

use secrecy::ExposeSecret;
use url::Url;

use crate::adapters::http::HttpTransport;
use crate::config::{ClientConfig, ValidationError};
use crate::domain::callback::{CallbackParams, CallbackVerifier};
use crate::domain::payment::PaymentLink;
use crate::domain::signature::SignatureEngine;
use crate::ports::GatewayTransport;

/// Gateway client for one merchant account.
pub struct Robokassa {
    config: ClientConfig,
    engine: SignatureEngine,
    transport: Arc<dyn GatewayTransport>,
}

impl Robokassa {
    /// Creates a client over the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the configuration is incomplete.
    pub fn new(config: ClientConfig) -> Result<Self, ValidationError> {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn GatewayTransport>,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        let engine = SignatureEngine::new(config.hash);
        Ok(Self {
            config,
            engine,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a signed hosted-payment-page URL.
    ///
    /// Optional fields that are absent or empty stay out of both the
    /// signature and the query string. A fiscal receipt is JSON-encoded and
    /// percent-encoded once before signing; the query serializer encodes it
    /// a second time, as the gateway expects.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` when `out_sum` or `description` is empty
    /// or `invoice_id` is zero.
    pub fn payment_url(&self, link: &PaymentLink) -> Result<Url, ClientError> {
        if link.out_sum.is_empty() {
            return Err(ClientError::MissingParameter("OutSum"));
        }
        if link.invoice_id == 0 {
            return Err(ClientError::MissingParameter("InvoiceId"));
        }
        if link.description.is_empty() {
            return Err(ClientError::MissingParameter("Description"));
        }

        let credentials = &self.config.credentials;
        let invoice_id = link.invoice_id.to_string();
        let currency = link.currency.as_deref().filter(|c| !c.is_empty());
        let user_ip = link.user_ip.as_deref().filter(|ip| !ip.is_empty());
        let receipt = match &link.receipt {
            Some(value) => {
                let json = serde_json::to_string(value)
                    .map_err(|e| ClientError::Decode(e.to_string()))?;
                Some(urlencoding::encode(&json).into_owned())
            }
            None => None,
        };

        let password1 = credentials.password1().expose_secret();
        let mut required = vec![credentials.login(), link.out_sum.as_str(), invoice_id.as_str()];
        required.extend(currency);
        required.extend(user_ip);
        required.extend(receipt.as_deref());
        required.push(password1);

        let signature = self.engine.sign(&required, &link.custom);

        let mut url = self.config.endpoints.payment.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("MerchantLogin", credentials.login())
                .append_pair("OutSum", &link.out_sum)
                .append_pair("InvoiceId", &invoice_id)
                .append_pair("Description", &link.description);
            if let Some(code) = currency {
                query.append_pair("OutSumCurrency", code);
            }
            if let Some(ip) = user_ip {
                query.append_pair("UserIp", ip);
            }
            if let Some(encoded) = receipt.as_deref() {
                query.append_pair("Receipt", encoded);
            }
            if link.is_test || credentials.is_test() {
                query.append_pair("IsTest", "1");
            }
            if link.recurring {
                query.append_pair("Recurring", "true");
            }
            for field in link.custom.iter() {
                query.append_pair(&field.key, &field.value);
            }
            query.append_pair("SignatureValue", &signature);
        }

        tracing::debug!(invoice_id = link.invoice_id, "composed payment link");
        Ok(url)
    }

    /// Verifies a ResultURL payload against password #2.
    pub fn check_result(&self, params: &CallbackParams) -> bool {
        CallbackVerifier::new(self.engine, self.config.credentials.password2()).verify(params)
    }

    /// Verifies a SuccessURL payload against password #1.
    pub fn check_success(&self, params: &CallbackParams) -> bool {
        CallbackVerifier::new(self.engine, self.config.credentials.password1()).verify(params)
    }
}
