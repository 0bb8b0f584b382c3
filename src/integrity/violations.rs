//! Log integrity violations and how each is handled.

use thiserror::Error;

/// Problems found in a history log read back from storage.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LogViolation {
    #[error("Log holds {len} entries, more than the capacity of {capacity}")]
    OverCapacity { len: usize, capacity: usize },

    #[error("Entry {index} stores a blank note instead of null")]
    BlankNote { index: usize },

    #[error("Entry {index} is newer than the entry before it")]
    OutOfOrder { index: usize },
}

/// What loading does about a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remedy {
    /// Fix the log in place before using it
    Repair,

    /// Keep the log as is but log a warning
    ReportOnly,
}

impl LogViolation {
    pub fn remedy(&self) -> Remedy {
        match self {
            Self::OverCapacity { .. } | Self::BlankNote { .. } => Remedy::Repair,
            Self::OutOfOrder { .. } => Remedy::ReportOnly,
        }
    }
}
