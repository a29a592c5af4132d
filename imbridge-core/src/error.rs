//! Error types for Imbridge

use thiserror::Error;

/// Result type for Imbridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Imbridge
#[derive(Error, Debug)]
pub enum Error {
    /// Operation attempted in the wrong lifecycle state
    #[error("State error: {0}")]
    State(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Plugin error
    #[error("Plugin error: {0}")]
    Plugin(String),
}

impl Error {
    /// A state error for an operation that requires an initialized context.
    pub fn not_initialized() -> Self {
        Error::State("context not initialized".to_string())
    }
}
