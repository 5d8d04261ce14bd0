//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DeskHub
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DeskHubError {
    /// A remote service could not be reached, timed out, or answered with a
    /// server-side failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials were rejected by a remote service.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested remote entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller supplied an invalid or incomplete request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for DeskHub operations
pub type Result<T> = std::result::Result<T, DeskHubError>;
