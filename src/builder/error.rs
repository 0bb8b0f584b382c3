//! Errors raised while assembling a controller.

use crate::store::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Storage backend not specified. Call .backend(b) before .build()")]
    MissingBackend,

    #[error("History capacity must be at least 1")]
    ZeroCapacity,

    #[error("Chart window must be at least 1")]
    ZeroChartWindow,

    #[error("Storage key must not be empty")]
    EmptyStorageKey,

    #[error("Exercise duration '{field}' must be at least one second")]
    ZeroDuration { field: &'static str },

    #[error(transparent)]
    Backend(#[from] BackendError),
}
