//! SMS dispatch through the gateway's messaging endpoint.

use secrecy::ExposeSecret;
use serde_json::{Map, Value};

use super::{ClientError, Robokassa};
use crate::domain::signature::CustomFields;

/// Gateway-imposed message length limit, counted in characters.
pub const MAX_SMS_CHARS: usize = 128;

impl Robokassa {
    /// Sends an SMS to `phone` and returns the gateway's JSON answer as a
    /// generic mapping.
    ///
    /// The length limit counts characters, not bytes, so a 128-character
    /// Cyrillic message is accepted. A non-success HTTP status is logged
    /// and degrades to an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` for an empty phone or message,
    /// `MessageTooLong` past the limit, `Transport` on delivery failure and
    /// `Decode` when the body is not a JSON object.
    pub async fn send_sms(
        &self,
        phone: &str,
        message: &str,
    ) -> Result<Map<String, Value>, ClientError> {
        if phone.is_empty() {
            return Err(ClientError::MissingParameter("phone"));
        }
        if message.is_empty() {
            return Err(ClientError::MissingParameter("message"));
        }
        if message.chars().count() > MAX_SMS_CHARS {
            return Err(ClientError::MessageTooLong { max: MAX_SMS_CHARS });
        }

        let credentials = &self.config.credentials;
        let password1 = credentials.password1().expose_secret();
        let signature = self.engine.sign(
            &[credentials.login(), phone, message, password1],
            &CustomFields::new(),
        );

        let mut url = self.config.endpoints.sms.clone();
        url.query_pairs_mut()
            .append_pair("login", credentials.login())
            .append_pair("phone", phone)
            .append_pair("message", message)
            .append_pair("signature", &signature);

        let response = self.transport.get(url).await?;
        if !response.is_ok() {
            tracing::warn!(status = response.status, "SMS endpoint answered with an error status");
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ClientError::Decode("expected a JSON object".to_string())),
            Err(e) => Err(ClientError::Decode(e.to_string())),
        }
    }
}
