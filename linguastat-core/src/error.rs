//! Error types for linguastat-core

use thiserror::Error;

/// Main error type for the linguastat-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown period token, or a custom period with missing/inverted dates
    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    /// A snapshot collaborator failed to deliver its collection
    #[error("collaborator error: {0}")]
    Collaborator(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for linguastat-core
pub type Result<T> = std::result::Result<T, Error>;
