use thiserror::Error;

use crate::ports::TransportError;

/// Errors produced by gateway operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required parameter was empty or zero.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The interface language is not one the gateway offers.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The SMS text exceeds the gateway's length limit.
    #[error("Message exceeds the {max}-character limit")]
    MessageTooLong { max: usize },

    /// An extra recurring parameter would shadow a gateway-managed key.
    #[error("Parameter name is reserved by the gateway: {0}")]
    ReservedParameter(&'static str),

    /// The request could not be delivered.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The gateway answered with a body that could not be decoded.
    #[error("Failed to decode gateway response: {0}")]
    Decode(String),
}
