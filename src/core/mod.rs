//! Pure core types of the check-in flow.
//!
//! - Screen states via the `State` trait
//! - Named guard predicates for transition preconditions
//! - The fixed mood catalog
//! - History entries and the capped, newest-first log
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod mood;
mod state;

pub use guard::Guard;
pub use history::{normalize_note, HistoryEntry, HistoryLog, DEFAULT_CAPACITY};
pub use mood::{MoodCatalog, MoodId, MoodOption};
pub use state::{Screen, State};
