//! Integrity checks for history logs read back from storage.
//!
//! A log that parses can still be off: written by an older build with a
//! bigger cap, carrying `""` notes instead of `null`, or reordered by hand.
//! Rules use Stillwater's `Validation` so every problem is found in one pass
//! and logged together; the log is then repaired rather than thrown away.
//!
//! # Example
//!
//! ```rust
//! use calmly::core::HistoryLog;
//! use calmly::integrity::IntegrityBuilder;
//!
//! let rules = IntegrityBuilder::new().capacity(60).build();
//! assert!(rules.check(&HistoryLog::new()).is_success());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::IntegrityBuilder;
pub use rules::IntegrityRules;
pub use violations::{LogViolation, Remedy};
