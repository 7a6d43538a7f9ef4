//! Configuration error types

use thiserror::Error;

use crate::domain::signature::UnsupportedHashAlgorithm;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error(transparent)]
    UnsupportedHashAlgorithm(#[from] UnsupportedHashAlgorithm),

    #[error("Endpoint URL cannot serve as a base: {0}")]
    InvalidEndpoint(&'static str),
}
