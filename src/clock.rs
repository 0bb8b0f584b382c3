//! Wall-clock source for history timestamps.
//!
//! Exercise timing never reads the wall clock; it runs on the scheduler's
//! virtual time. Only saved entries and the screen trail are stamped here.
//!
//! # Example
//!
//! ```rust
//! use calmly::clock::{Clock, FixedClock};
//! use chrono::{TimeZone, Utc};
//!
//! let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! assert_eq!(FixedClock(at).now(), at);
//! ```

use chrono::{DateTime, Utc};

/// Source of wall-clock timestamps for history entries.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
