//! Typed outbound payment requests.
//!
//! The gateway's generic key/value parameter bags become typed structs with
//! an explicit set of recognized optional keys, plus an open-ended ordered
//! collection for the `Shp_*` extension mechanism.

use serde_json::Value;

use super::signature::CustomFields;

/// Parameters for an outbound payment link.
///
/// `invoice_id`, `out_sum` and `description` are required; the enumerated
/// optional keys have builder-style setters. Optional fields enter the
/// signature only when present and non-empty.
#[derive(Debug, Clone)]
pub struct PaymentLink {
    /// Merchant invoice identifier (`InvoiceId`). Must be non-zero.
    pub invoice_id: u64,

    /// Payment amount as the gateway expects it, e.g. `"100.00"` (`OutSum`).
    pub out_sum: String,

    /// Human-readable purchase description shown to the payer.
    pub description: String,

    /// ISO currency code for the amount (`OutSumCurrency`).
    pub currency: Option<String>,

    /// Payer IP address, pinned into the signature (`UserIp`).
    pub user_ip: Option<String>,

    /// Fiscal receipt payload (`Receipt`). JSON-encoded then
    /// percent-encoded before signing and transmission.
    pub receipt: Option<Value>,

    /// Route the payment through the gateway's test environment.
    pub is_test: bool,

    /// Ask the gateway to register the payment as the parent of future
    /// recurring charges.
    pub recurring: bool,

    /// Merchant-defined `Shp_*` fields, signed in insertion order.
    pub custom: CustomFields,
}

impl PaymentLink {
    pub fn new(invoice_id: u64, out_sum: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            invoice_id,
            out_sum: out_sum.into(),
            description: description.into(),
            currency: None,
            user_ip: None,
            receipt: None,
            is_test: false,
            recurring: false,
            custom: CustomFields::new(),
        }
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn with_user_ip(mut self, ip: impl Into<String>) -> Self {
        self.user_ip = Some(ip.into());
        self
    }

    pub fn with_receipt(mut self, receipt: Value) -> Self {
        self.receipt = Some(receipt);
        self
    }

    pub fn with_test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Adds a `Shp_*` extension field. Keys without the prefix are dropped.
    pub fn with_custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.push(key, value);
        self
    }
}

/// Parameters for charging a recurring payment against a previously
/// authorized parent invoice.
#[derive(Debug, Clone)]
pub struct RecurringPayment {
    /// New invoice identifier for this charge. Must be non-zero.
    pub invoice_id: u64,

    /// Parent invoice that authorized recurring charges. Must be non-zero.
    pub previous_invoice_id: u64,

    /// Charge amount, e.g. `"100.00"`.
    pub out_sum: String,

    /// Additional caller-supplied form fields, sent unsigned.
    pub extra: Vec<(String, String)>,
}

impl RecurringPayment {
    pub fn new(invoice_id: u64, previous_invoice_id: u64, out_sum: impl Into<String>) -> Self {
        Self {
            invoice_id,
            previous_invoice_id,
            out_sum: out_sum.into(),
            extra: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}
