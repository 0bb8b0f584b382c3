//! History store error types.

use thiserror::Error;

/// Failures reported by a key-value backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend refused the operation (quota, read-only medium, ...).
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while loading or persisting the history log.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Serialization of the log to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The stored payload is not a list of history entries
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
