//! Merchant credentials.

use secrecy::{ExposeSecret, SecretString};

use super::error::ValidationError;

/// Merchant credential set, statically tagged as live or test.
///
/// The gateway issues separate password pairs for the live and test
/// environments; signing and verification must use the pair matching the
/// environment. Passwords are immutable after construction and redacted
/// from `Debug` output.
#[derive(Debug, Clone)]
pub enum CredentialSet {
    Live {
        login: String,
        password1: SecretString,
        password2: SecretString,
    },
    Test {
        login: String,
        password1: SecretString,
        password2: SecretString,
    },
}

impl CredentialSet {
    pub fn live(
        login: impl Into<String>,
        password1: impl Into<String>,
        password2: impl Into<String>,
    ) -> Self {
        Self::Live {
            login: login.into(),
            password1: SecretString::new(password1.into()),
            password2: SecretString::new(password2.into()),
        }
    }

    pub fn test(
        login: impl Into<String>,
        password1: impl Into<String>,
        password2: impl Into<String>,
    ) -> Self {
        Self::Test {
            login: login.into(),
            password1: SecretString::new(password1.into()),
            password2: SecretString::new(password2.into()),
        }
    }

    /// Merchant login, sent as `MerchantLogin` on every request.
    pub fn login(&self) -> &str {
        match self {
            Self::Live { login, .. } | Self::Test { login, .. } => login,
        }
    }

    /// Password #1: outbound signatures and SuccessURL verification.
    pub fn password1(&self) -> &SecretString {
        match self {
            Self::Live { password1, .. } | Self::Test { password1, .. } => password1,
        }
    }

    /// Password #2: status checks and ResultURL verification.
    pub fn password2(&self) -> &SecretString {
        match self {
            Self::Live { password2, .. } | Self::Test { password2, .. } => password2,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test { .. })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.login().is_empty() {
            return Err(ValidationError::MissingRequired("login"));
        }
        if self.password1().expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("password1"));
        }
        if self.password2().expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("password2"));
        }
        Ok(())
    }
}
