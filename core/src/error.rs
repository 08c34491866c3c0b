//! Error types and handling for datastage core

use thiserror::Error;

/// Result type alias for datastage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for datastage core
#[derive(Error, Debug)]
pub enum Error {
    /// The research topic was empty after trimming
    #[error("Research topic must not be empty")]
    EmptyTopic,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Research backend errors
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("No configuration found")]
    NoConfigFound,
}

/// Research backend errors
#[derive(Error, Debug)]
pub enum BackendError {
    /// The pre-flight health probe failed; no job was created
    #[error("Backend is not responding: {message}")]
    Unreachable { message: String },

    /// The backend answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    RequestFailed { status: u16, message: String },

    /// Transport-level failure (connect, timeout, malformed body)
    #[error("Network error: {message}")]
    Network { message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
