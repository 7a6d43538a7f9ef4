//! Gateway endpoint configuration.
//!
//! The production URLs are baked in as defaults; every endpoint can be
//! overridden individually to point the client at a mock server in tests.

use url::Url;

const DEFAULT_PAYMENT_URL: &str = "https://auth.robokassa.ru/Merchant/Index.aspx";
const DEFAULT_RECURRING_URL: &str = "https://auth.robokassa.ru/Merchant/Recurring";
const DEFAULT_SMS_URL: &str = "https://services.robokassa.ru/SMS/";
const DEFAULT_WEBSERVICE_URL: &str = "https://auth.robokassa.ru/Merchant/WebService/Service.asmx";

/// Base URLs for the gateway's four surfaces.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Payment page the generated links send the payer to.
    pub payment: Url,

    /// Recurring (repeat) payment endpoint, POST form.
    pub recurring: Url,

    /// SMS dispatch service.
    pub sms: Url,

    /// Informational webservice; operation names are appended as path
    /// segments.
    pub webservice: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            payment: Url::parse(DEFAULT_PAYMENT_URL).expect("constant URL is valid"),
            recurring: Url::parse(DEFAULT_RECURRING_URL).expect("constant URL is valid"),
            sms: Url::parse(DEFAULT_SMS_URL).expect("constant URL is valid"),
            webservice: Url::parse(DEFAULT_WEBSERVICE_URL).expect("constant URL is valid"),
        }
    }
}

impl Endpoints {
    pub fn with_payment(mut self, url: Url) -> Self {
        self.payment = url;
        self
    }

    pub fn with_recurring(mut self, url: Url) -> Self {
        self.recurring = url;
        self
    }

    pub fn with_sms(mut self, url: Url) -> Self {
        self.sms = url;
        self
    }

    pub fn with_webservice(mut self, url: Url) -> Self {
        self.webservice = url;
        self
    }
}
