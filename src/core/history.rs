//! Completed check-in records and the capped, newest-first log holding them.

use super::mood::{MoodId, MoodOption};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of entries the log keeps.
pub const DEFAULT_CAPACITY: usize = 60;

/// One completed check-in.
///
/// `value` is copied from the catalog when the entry is created, so later
/// catalog changes never rewrite history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    pub mood: MoodId,
    pub value: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl HistoryEntry {
    /// Build an entry for `mood`, normalizing the raw note text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calmly::core::{HistoryEntry, MoodId};
    /// use chrono::Utc;
    ///
    /// let entry = HistoryEntry::new(MoodId::Sad.option(), "  felt better ", Utc::now());
    /// assert_eq!(entry.value, 2.0);
    /// assert_eq!(entry.note.as_deref(), Some("felt better"));
    ///
    /// let blank = HistoryEntry::new(MoodId::Okay.option(), "   ", Utc::now());
    /// assert!(blank.note.is_none());
    /// ```
    pub fn new(mood: &MoodOption, raw_note: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            mood: mood.id,
            value: mood.value,
            note: normalize_note(raw_note),
        }
    }
}

/// Trim a note; blank input becomes `None`.
pub fn normalize_note(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Newest-first sequence of history entries.
///
/// `record` is pure: it returns a new log with the entry at the head and
/// anything past `capacity` dropped immediately.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries that are already newest-first. No capping is applied.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Return a new log with `entry` at the head, capped at `capacity`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calmly::core::{HistoryEntry, HistoryLog, MoodId};
    /// use chrono::Utc;
    ///
    /// let log = HistoryLog::new();
    /// let first = HistoryEntry::new(MoodId::Happy.option(), "", Utc::now());
    /// let second = HistoryEntry::new(MoodId::Sad.option(), "", Utc::now());
    ///
    /// let log = log.record(first, 1).record(second.clone(), 1);
    /// assert_eq!(log.len(), 1);
    /// assert_eq!(log.newest(), Some(&second));
    /// ```
    pub fn record(&self, entry: HistoryEntry, capacity: usize) -> Self {
        let mut entries = Vec::with_capacity((self.entries.len() + 1).min(capacity));
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(capacity);
        Self { entries }
    }

    /// Keep only the `capacity` newest entries.
    pub fn truncated(mut self, capacity: usize) -> Self {
        self.entries.truncate(capacity);
        self
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
