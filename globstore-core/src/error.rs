//! Error types for globstore-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
///
/// Absence of a value is NOT an error: `get` returns `Ok(None)` for an
/// undefined node. `NotFound` exists for protocol-level signalling (a remote
/// server reporting an absent resource), never for plain lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found (protocol-level signal, not a plain undefined value)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed addressing: empty path where one is required, empty-string
    /// subscript, or empty global name. Rejected before any mutation.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Remote transport failure (connect/timeout). Retryable; never folded
    /// into `NotFound`.
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// Unexpected or malformed response from a remote store
    #[error("Remote error: {0}")]
    Remote(String),
}

impl Error {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Error::InvalidPath(msg.into())
    }

    /// Create a connection lost error
    pub fn connection_lost(msg: impl Into<String>) -> Self {
        Error::ConnectionLost(msg.into())
    }

    /// Create a remote error
    pub fn remote(msg: impl Into<String>) -> Self {
        Error::Remote(msg.into())
    }

    /// Whether the error is worth retrying (transport-level only)
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::ConnectionLost(_))
    }
}
