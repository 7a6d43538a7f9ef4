//! Informational webservice queries.
//!
//! Operations are GET requests against `Service.asmx/<Operation>`; answers
//! are XML documents decoded into generic JSON mappings. Only the invoice
//! status check is signed.

use std::fmt;
use std::str::FromStr;

use secrecy::ExposeSecret;
use serde_json::{Map, Value};

use super::{ClientError, Robokassa};
use crate::adapters::http::xml_to_map;
use crate::domain::signature::CustomFields;

/// Interface language for localized webservice answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(ClientError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl Robokassa {
    /// Currency groups available to this merchant (`GetCurrencies`).
    pub async fn get_currencies(
        &self,
        language: Language,
    ) -> Result<Map<String, Value>, ClientError> {
        self.webservice(
            "GetCurrencies",
            vec![
                ("MerchantLogin", self.config.credentials.login().to_string()),
                ("Language", language.as_str().to_string()),
            ],
        )
        .await
    }

    /// Payment methods available to this merchant (`GetPaymentMethods`).
    pub async fn get_payment_methods(
        &self,
        language: Language,
    ) -> Result<Map<String, Value>, ClientError> {
        self.webservice(
            "GetPaymentMethods",
            vec![
                ("MerchantLogin", self.config.credentials.login().to_string()),
                ("Language", language.as_str().to_string()),
            ],
        )
        .await
    }

    /// Per-method amounts the payer would be charged for `out_sum`
    /// (`GetRates`). `inc_curr_label` narrows the answer to one method;
    /// when absent or empty the parameter is omitted and the gateway
    /// answers for every method.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` when `out_sum` is empty.
    pub async fn get_rates(
        &self,
        out_sum: &str,
        language: Language,
        inc_curr_label: Option<&str>,
    ) -> Result<Map<String, Value>, ClientError> {
        if out_sum.is_empty() {
            return Err(ClientError::MissingParameter("OutSum"));
        }
        let mut params = vec![("MerchantLogin", self.config.credentials.login().to_string())];
        if let Some(label) = inc_curr_label.filter(|l| !l.is_empty()) {
            params.push(("IncCurrLabel", label.to_string()));
        }
        params.push(("OutSum", out_sum.to_string()));
        params.push(("Language", language.as_str().to_string()));
        self.webservice("GetRates", params).await
    }

    /// Amount the merchant would receive if the payer pays `inc_sum`
    /// through the method `inc_curr_label` (`CalcOutSumm`).
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` when either argument is empty.
    pub async fn calc_out_sum(
        &self,
        inc_sum: &str,
        inc_curr_label: &str,
    ) -> Result<Map<String, Value>, ClientError> {
        if inc_sum.is_empty() {
            return Err(ClientError::MissingParameter("IncSum"));
        }
        if inc_curr_label.is_empty() {
            return Err(ClientError::MissingParameter("IncCurrLabel"));
        }
        self.webservice(
            "CalcOutSumm",
            vec![
                ("MerchantLogin", self.config.credentials.login().to_string()),
                ("IncCurrLabel", inc_curr_label.to_string()),
                ("IncSum", inc_sum.to_string()),
            ],
        )
        .await
    }

    /// Current state of an invoice (`OpState`), signed with the status-check
    /// signature `login:invoiceId:password2`.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` when `invoice_id` is zero.
    pub async fn op_state(&self, invoice_id: u64) -> Result<Map<String, Value>, ClientError> {
        if invoice_id == 0 {
            return Err(ClientError::MissingParameter("InvoiceID"));
        }

        let credentials = &self.config.credentials;
        let invoice = invoice_id.to_string();
        let password2 = credentials.password2().expose_secret();
        let signature = self.engine.sign(
            &[credentials.login(), invoice.as_str(), password2],
            &CustomFields::new(),
        );

        self.webservice(
            "OpState",
            vec![
                ("MerchantLogin", credentials.login().to_string()),
                ("InvoiceID", invoice),
                ("Signature", signature),
            ],
        )
        .await
    }

    async fn webservice(
        &self,
        operation: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Map<String, Value>, ClientError> {
        let mut url = self.config.endpoints.webservice.clone();
        url.path_segments_mut()
            .expect("endpoint validated as a base URL")
            .push(operation);
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in &params {
                query.append_pair(key, value);
            }
        }

        let response = self.transport.get(url).await?;
        if !response.is_ok() {
            tracing::warn!(
                status = response.status,
                operation,
                "webservice answered with an error status"
            );
            return Ok(Map::new());
        }

        xml_to_map(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
