//! Shared error types.

use thiserror::Error;

/// Errors surfaced by the shared core layer.
#[derive(Debug, Error)]
pub enum RecommenderError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Human-readable description of the failure.
        message: String,
        /// The environment variable involved, when known.
        key: Option<String>,
    },
}
