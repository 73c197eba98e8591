//! Error types for the ambient layers (configuration, logging, CLI).
//!
//! The tree builder and the attendance rules never fail; they degrade to a
//! best-effort result instead. Only the code around them returns these.

use thiserror::Error;

/// Errors surfaced by configuration loading, logging setup and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
