//! Inbound payment-confirmation callbacks.
//!
//! The gateway calls the merchant's ResultURL and SuccessURL with a signed
//! key/value payload. Verification recomputes the signature from the
//! payload's own `OutSum` and `InvId` plus the stored password and the
//! payload's `Shp_*` fields. It never errors: a malformed or truncated
//! payload simply fails to verify.

use secrecy::{ExposeSecret, SecretString};

use super::signature::{CustomFields, SignatureEngine};

/// Ordered key/value pairs as received from the gateway.
///
/// Order is preserved because the `Shp_*` entries enter the recomputed
/// signature in payload order.
#[derive(Debug, Clone, Default)]
pub struct CallbackParams {
    pairs: Vec<(String, String)>,
}

impl CallbackParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parses an `application/x-www-form-urlencoded` body or query string.
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value for an exact key match.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The payload's `Shp_*` entries, in payload order.
    pub fn custom_fields(&self) -> CustomFields {
        CustomFields::collect(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Verifies inbound callback signatures against a stored password.
///
/// ResultURL payloads verify against password #2, SuccessURL payloads
/// against password #1; the caller picks which (see the client facade's
/// `check_result` / `check_success`).
pub struct CallbackVerifier<'a> {
    engine: SignatureEngine,
    password: &'a SecretString,
}

impl<'a> CallbackVerifier<'a> {
    pub fn new(engine: SignatureEngine, password: &'a SecretString) -> Self {
        Self { engine, password }
    }

    /// True iff the payload's `SignatureValue` matches the digest of
    /// `OutSum:InvId:password` followed by the payload's extension fields.
    ///
    /// Missing or garbled fields yield `false`, never an error; signature
    /// comparison is case-insensitive.
    pub fn verify(&self, params: &CallbackParams) -> bool {
        let Some(supplied) = params.get("SignatureValue") else {
            tracing::warn!("callback payload is missing SignatureValue");
            return false;
        };

        let out_sum = params.get("OutSum").unwrap_or_default();
        let inv_id = params.get("InvId").unwrap_or_default();
        let required = [out_sum, inv_id, self.password.expose_secret().as_str()];

        let valid = self
            .engine
            .verify(&required, &params.custom_fields(), supplied);
        if !valid {
            tracing::warn!(inv_id, "callback signature mismatch");
        }
        valid
    }
}
