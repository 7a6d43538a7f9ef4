//! Recurring charges against a previously authorized parent invoice.

use secrecy::ExposeSecret;

use super::{ClientError, Robokassa};
use crate::domain::payment::RecurringPayment;
use crate::domain::signature::CustomFields;

/// Form keys the gateway interprets itself; callers may not shadow them
/// through `extra`.
const RESERVED_KEYS: [&str; 3] = ["IncCurrLabel", "ExpirationDate", "Recurring"];

impl Robokassa {
    /// Charges a recurring payment. Returns `true` when the gateway
    /// acknowledges the charge with `OK<invoice_id>`.
    ///
    /// A non-success HTTP status is logged and reported as `Ok(false)`; only
    /// delivery failures become errors.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` for an empty amount or zero invoice
    /// identifiers and `ReservedParameter` when `extra` would shadow a
    /// gateway-managed key.
    pub async fn recurrent(&self, payment: &RecurringPayment) -> Result<bool, ClientError> {
        if payment.out_sum.is_empty() {
            return Err(ClientError::MissingParameter("OutSum"));
        }
        if payment.invoice_id == 0 {
            return Err(ClientError::MissingParameter("InvoiceId"));
        }
        if payment.previous_invoice_id == 0 {
            return Err(ClientError::MissingParameter("PreviousInvoiceId"));
        }
        for (key, _) in &payment.extra {
            if let Some(reserved) = RESERVED_KEYS.iter().find(|r| **r == *key) {
                return Err(ClientError::ReservedParameter(*reserved));
            }
        }

        let credentials = &self.config.credentials;
        let invoice_id = payment.invoice_id.to_string();
        let previous_invoice_id = payment.previous_invoice_id.to_string();
        let password1 = credentials.password1().expose_secret();
        let signature = self.engine.sign(
            &[
                credentials.login(),
                payment.out_sum.as_str(),
                invoice_id.as_str(),
                password1,
            ],
            &CustomFields::new(),
        );

        let mut form = vec![
            ("MerchantLogin".to_string(), credentials.login().to_string()),
            ("InvoiceId".to_string(), invoice_id),
            ("PreviousInvoiceId".to_string(), previous_invoice_id),
            ("SignatureValue".to_string(), signature),
            ("OutSum".to_string(), payment.out_sum.clone()),
        ];
        form.extend(payment.extra.iter().cloned());

        let url = self.config.endpoints.recurring.clone();
        let response = self.transport.post_form(url, &form).await?;
        if !response.is_ok() {
            tracing::warn!(
                status = response.status,
                invoice_id = payment.invoice_id,
                "recurring endpoint answered with an error status"
            );
            return Ok(false);
        }

        Ok(response.body == format!("OK{}", payment.invoice_id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::mock::MockTransport;
    use crate::config::{ClientConfig, CredentialSet};

    fn client_with(transport: Arc<MockTransport>) -> Robokassa {
        Robokassa::with_transport(
            ClientConfig::new(CredentialSet::live("demo", "pwd1", "pwd2")),
            transport,
        )
        .unwrap()
    }

    fn form_value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[tokio::test]
    async fn acknowledged_charge_returns_true() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, "OK42");
        let client = client_with(Arc::clone(&transport));

        let charged = client.recurrent(&RecurringPayment::new(42, 7, "100.00")).await.unwrap();
        assert!(charged);

        let recorded = transport.requests();
        assert_eq!(recorded[0].method, "POST");
        let form = &recorded[0].form;
        assert_eq!(form_value(form, "InvoiceId"), Some("42"));
        assert_eq!(form_value(form, "PreviousInvoiceId"), Some("7"));
        assert_eq!(form_value(form, "OutSum"), Some("100.00"));
        // sha256("demo:100.00:42:pwd1")
        assert_eq!(
            form_value(form, "SignatureValue"),
            Some("aca28ab6471015a1f38798cc82220518f8c42a520e3ff6ea3fe20180c4e6bd79")
        );
    }

    #[tokio::test]
    async fn acknowledgement_must_match_the_invoice() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, "OK41");
        let client = client_with(Arc::clone(&transport));

        let charged = client.recurrent(&RecurringPayment::new(42, 7, "100.00")).await.unwrap();
        assert!(!charged);
    }

    #[tokio::test]
    async fn error_status_is_a_declined_charge_not_an_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(500, "boom");
        let client = client_with(Arc::clone(&transport));

        let charged = client.recurrent(&RecurringPayment::new(42, 7, "100.00")).await.unwrap();
        assert!(!charged);
    }

    #[tokio::test]
    async fn extra_params_ride_along_unsigned() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, "OK1");
        let client = client_with(Arc::clone(&transport));

        let payment = RecurringPayment::new(1, 2, "5.00").with_param("Email", "a@b.c");
        client.recurrent(&payment).await.unwrap();

        let form = &transport.requests()[0].form;
        assert_eq!(form_value(form, "Email"), Some("a@b.c"));
    }

    #[tokio::test]
    async fn reserved_extra_keys_are_rejected() {
        let client = client_with(Arc::new(MockTransport::new()));
        let payment = RecurringPayment::new(1, 2, "5.00").with_param("Recurring", "false");
        assert!(matches!(
            client.recurrent(&payment).await,
            Err(ClientError::ReservedParameter("Recurring"))
        ));
    }

    #[tokio::test]
    async fn zero_invoice_ids_are_rejected() {
        let client = client_with(Arc::new(MockTransport::new()));
        assert!(matches!(
            client.recurrent(&RecurringPayment::new(0, 2, "5.00")).await,
            Err(ClientError::MissingParameter("InvoiceId"))
        ));
        assert!(matches!(
            client.recurrent(&RecurringPayment::new(1, 0, "5.00")).await,
            Err(ClientError::MissingParameter("PreviousInvoiceId"))
        ));
    }
}
