//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Endpoint path '{0}' must start with '/'")]
    InvalidPath(&'static str),

    #[error("Details path must contain the {{topic_id}} placeholder")]
    MissingTopicPlaceholder,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Custom entry label cannot be empty")]
    EmptyCustomEntryLabel,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
