//! Error types for ideas-core

use thiserror::Error;

/// Result type alias using ideas-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ideas-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty after trimming
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote store was unreachable
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store answered with an unsuccessful status
    #[error("Remote store error: {0}")]
    Fetch(String),

    /// Edit requested for a note that is not in the cache
    #[error("Note not found in cache: {0}")]
    NotInCache(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from talking to the remote store.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Fetch(_))
    }
}
