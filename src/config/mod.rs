//! Client configuration module
//!
//! Type-safe configuration with optional loading from environment variables
//! via the `config` and `dotenvy` crates. Construction-time validation
//! rejects unsupported hash identifiers and incomplete credential sets
//! before any request is attempted.
//!
//! # Example
//!
//! ```no_run
//! use robokassa::config::{ClientConfig, CredentialSet};
//!
//! let config = ClientConfig::new(CredentialSet::live("shop", "pwd1", "pwd2"));
//! config.validate().expect("Invalid configuration");
//! ```

mod credentials;
mod endpoints;
mod error;

pub use credentials::CredentialSet;
pub use endpoints::Endpoints;
pub use error::{ConfigError, ValidationError};

use std::str::FromStr;

use serde::Deserialize;

use crate::domain::signature::HashAlgorithm;

/// Root client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Merchant credentials (tagged live/test set).
    pub credentials: CredentialSet,

    /// Digest algorithm for all signatures. Defaults to SHA-256.
    pub hash: HashAlgorithm,

    /// Gateway base URLs; production defaults, injectable for tests.
    pub endpoints: Endpoints,
}

impl ClientConfig {
    pub fn new(credentials: CredentialSet) -> Self {
        Self {
            credentials,
            hash: HashAlgorithm::default(),
            endpoints: Endpoints::default(),
        }
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Sets the hash algorithm from a gateway-style identifier
    /// (`"sha256"`, `"md5"`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnsupportedHashAlgorithm` for identifiers
    /// outside the supported set, naming the allowed values.
    pub fn with_hash_name(mut self, name: &str) -> Result<Self, ValidationError> {
        self.hash = HashAlgorithm::from_str(name)?;
        Ok(self)
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if credentials are incomplete or any
    /// endpoint URL cannot serve as a base for query/path assembly.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.credentials.validate()?;

        let endpoints = [
            ("payment", &self.endpoints.payment),
            ("recurring", &self.endpoints.recurring),
            ("sms", &self.endpoints.sms),
            ("webservice", &self.endpoints.webservice),
        ];
        for (name, url) in endpoints {
            if url.cannot_be_a_base() {
                return Err(ValidationError::InvalidEndpoint(name));
            }
        }
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `ROBOKASSA` prefix
    /// 3. Deserializes into the flat raw form and converts it into the
    ///    tagged credential set
    ///
    /// # Environment Variable Format
    ///
    /// - `ROBOKASSA__LOGIN=myshop`
    /// - `ROBOKASSA__PASSWORD1=...` / `ROBOKASSA__PASSWORD2=...`
    /// - `ROBOKASSA__IS_TEST=true` plus `ROBOKASSA__TEST_PASSWORD1` /
    ///   `ROBOKASSA__TEST_PASSWORD2`
    /// - `ROBOKASSA__HASH=sha512` (optional, defaults to sha256)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, the hash
    /// identifier is unsupported, or test mode lacks its password pair.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw: RawConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ROBOKASSA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        let config = ClientConfig::try_from(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// Flat environment form, mirroring the gateway's own parameter names.
#[derive(Debug, Deserialize)]
struct RawConfig {
    login: String,
    password1: String,
    password2: String,
    #[serde(default)]
    is_test: bool,
    test_password1: Option<String>,
    test_password2: Option<String>,
    hash: Option<String>,
}

impl TryFrom<RawConfig> for ClientConfig {
    type Error = ValidationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let credentials = if raw.is_test {
            let password1 = raw
                .test_password1
                .filter(|p| !p.is_empty())
                .ok_or(ValidationError::MissingRequired("test_password1"))?;
            let password2 = raw
                .test_password2
                .filter(|p| !p.is_empty())
                .ok_or(ValidationError::MissingRequired("test_password2"))?;
            CredentialSet::test(raw.login, password1, password2)
        } else {
            CredentialSet::live(raw.login, raw.password1, raw.password2)
        };

        let hash = match raw.hash.as_deref().filter(|h| !h.is_empty()) {
            Some(name) => HashAlgorithm::from_str(name)?,
            None => HashAlgorithm::default(),
        };

        Ok(ClientConfig::new(credentials).with_hash(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(is_test: bool) -> RawConfig {
        RawConfig {
            login: "shop".to_string(),
            password1: "p1".to_string(),
            password2: "p2".to_string(),
            is_test,
            test_password1: None,
            test_password2: None,
            hash: None,
        }
    }

    #[test]
    fn default_hash_is_sha256() {
        let config = ClientConfig::new(CredentialSet::live("shop", "p1", "p2"));
        assert_eq!(config.hash, HashAlgorithm::Sha256);
    }

    #[test]
    fn with_hash_name_accepts_supported_identifier() {
        let config = ClientConfig::new(CredentialSet::live("shop", "p1", "p2"))
            .with_hash_name("md5")
            .unwrap();
        assert_eq!(config.hash, HashAlgorithm::Md5);
    }

    #[test]
    fn with_hash_name_rejects_crc32_before_any_request() {
        let result =
            ClientConfig::new(CredentialSet::live("shop", "p1", "p2")).with_hash_name("crc32");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("crc32"));
        assert!(err.to_string().contains("sha256"));
    }

    #[test]
    fn validate_surfaces_credential_errors() {
        let config = ClientConfig::new(CredentialSet::live("shop", "", "p2"));
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("password1"))
        ));
    }

    #[test]
    fn raw_live_config_converts() {
        let config = ClientConfig::try_from(raw(false)).unwrap();
        assert!(!config.credentials.is_test());
        assert_eq!(config.credentials.login(), "shop");
    }

    #[test]
    fn raw_test_config_requires_test_passwords() {
        let result = ClientConfig::try_from(raw(true));
        assert!(matches!(
            result,
            Err(ValidationError::MissingRequired("test_password1"))
        ));

        let mut with_one = raw(true);
        with_one.test_password1 = Some("t1".to_string());
        assert!(matches!(
            ClientConfig::try_from(with_one),
            Err(ValidationError::MissingRequired("test_password2"))
        ));
    }

    #[test]
    fn raw_test_config_selects_test_pair() {
        use secrecy::ExposeSecret;

        let mut raw = raw(true);
        raw.test_password1 = Some("t1".to_string());
        raw.test_password2 = Some("t2".to_string());

        let config = ClientConfig::try_from(raw).unwrap();
        assert!(config.credentials.is_test());
        assert_eq!(config.credentials.password1().expose_secret(), "t1");
        assert_eq!(config.credentials.password2().expose_secret(), "t2");
    }

    #[test]
    fn raw_config_parses_hash_identifier() {
        let mut raw = raw(false);
        raw.hash = Some("sha512".to_string());
        let config = ClientConfig::try_from(raw).unwrap();
        assert_eq!(config.hash, HashAlgorithm::Sha512);
    }
}
