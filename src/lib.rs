//! Robokassa payment gateway client.
//!
//! Builds signed hosted-payment-page links, verifies inbound payment
//! callbacks, charges recurring payments, sends SMS and queries the
//! informational webservice. Cryptographic signing and callback checks are
//! pure and need no I/O; the networked operations run over a pluggable
//! async transport.
//!
//! # Example
//!
//! ```no_run
//! use robokassa::{CallbackParams, ClientConfig, CredentialSet, PaymentLink, Robokassa};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new(CredentialSet::live("myshop", "password1", "password2"));
//! let client = Robokassa::new(config)?;
//!
//! // Redirect the payer here.
//! let url = client.payment_url(
//!     &PaymentLink::new(42, "100.00", "Order #42").with_custom_field("Shp_user", "alice"),
//! )?;
//!
//! // Later, when the gateway calls the ResultURL back:
//! let params = CallbackParams::from_query("OutSum=100.00&InvId=42&SignatureValue=...");
//! if client.check_result(&params) {
//!     // mark the invoice paid
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod client;
pub mod config;
pub mod domain;
pub mod ports;

pub use client::{ClientError, Language, Robokassa, MAX_SMS_CHARS};
pub use config::{ClientConfig, ConfigError, CredentialSet, Endpoints, ValidationError};
pub use domain::callback::{CallbackParams, CallbackVerifier};
pub use domain::payment::{PaymentLink, RecurringPayment};
pub use domain::signature::{CustomField, CustomFields, HashAlgorithm, SignatureEngine};
