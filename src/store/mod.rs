//! Durable, capped history of completed check-ins.
//!
//! The store keeps the authoritative [`HistoryLog`] in memory and mirrors it
//! to a single key of an injected [`KeyValueBackend`]. Storage problems never
//! reach the caller: a missing or unreadable value loads as an empty log, and
//! a failed write leaves the in-memory log in charge for the rest of the
//! process.
//!
//! The store is not internally synchronized. Hosts that share it between
//! threads must serialize `append` against reads themselves.

use crate::core::{HistoryEntry, HistoryLog, DEFAULT_CAPACITY};
use crate::integrity::{IntegrityBuilder, IntegrityRules};

pub mod backend;
pub mod error;
pub mod format;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::{BackendError, StoreError};

/// Key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "calmly_history";

/// Whether an append reached durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Persisted,
    /// The backend write failed; the entry lives in memory only.
    MemoryOnly,
}

/// Append-only, capacity-bounded history log with a persistence backend.
///
/// # Example
///
/// ```rust
/// use calmly::core::{HistoryEntry, MoodId};
/// use calmly::store::{HistoryStore, MemoryBackend, WriteOutcome};
/// use chrono::Utc;
///
/// let mut store = HistoryStore::open(MemoryBackend::new(), "calmly_history", 60);
/// assert!(store.all().is_empty());
///
/// let entry = HistoryEntry::new(MoodId::Okay.option(), "", Utc::now());
/// assert_eq!(store.append(entry), WriteOutcome::Persisted);
/// assert_eq!(store.all().len(), 1);
/// ```
pub struct HistoryStore<B: KeyValueBackend> {
    backend: B,
    key: String,
    log: HistoryLog,
    rules: IntegrityRules,
}

impl<B: KeyValueBackend> HistoryStore<B> {
    /// Open the store and load whatever the backend holds under `key`.
    pub fn open(backend: B, key: impl Into<String>, capacity: usize) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            log: HistoryLog::new(),
            rules: IntegrityBuilder::new().capacity(capacity).build(),
        };
        store.log = store.load();
        store
    }

    /// Open with the default key and capacity.
    pub fn with_defaults(backend: B) -> Self {
        Self::open(backend, DEFAULT_STORAGE_KEY, DEFAULT_CAPACITY)
    }

    /// Read the log from the backend.
    ///
    /// Never fails: an absent key, a backend error, or a payload that does
    /// not parse all yield an empty log. A parsed log is checked and
    /// repaired by the integrity rules.
    pub fn load(&self) -> HistoryLog {
        match self.read_raw() {
            Ok(Some(log)) => {
                let log = self.rules.enforce(log);
                tracing::debug!(key = %self.key, entries = log.len(), "History loaded");
                log
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored history, starting empty");
                HistoryLog::new()
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Stored history unreadable, starting empty"
                );
                HistoryLog::new()
            }
        }
    }

    fn read_raw(&self) -> Result<Option<HistoryLog>, StoreError> {
        match self.backend.read(&self.key)? {
            Some(raw) => format::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Insert `entry` at the head, drop anything past capacity, and persist.
    ///
    /// A failed write is logged and swallowed; the in-memory log is updated
    /// either way.
    pub fn append(&mut self, entry: HistoryEntry) -> WriteOutcome {
        self.log = self.log.record(entry, self.rules.capacity());

        match self.persist() {
            Ok(()) => WriteOutcome::Persisted,
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "History write failed, keeping entry in memory"
                );
                WriteOutcome::MemoryOnly
            }
        }
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = format::encode(&self.log)?;
        self.backend.write(&self.key, &raw)?;
        Ok(())
    }

    /// Newest-first view of the log.
    pub fn all(&self) -> &HistoryLog {
        &self.log
    }

    pub fn capacity(&self) -> usize {
        self.rules.capacity()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoodId;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(n: i64) -> HistoryEntry {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n);
        HistoryEntry::new(MoodId::Okay.option(), &format!("note {}", n), ts)
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = HistoryStore::with_defaults(MemoryBackend::new());
        assert!(store.all().is_empty());
    }

    #[test]
    fn corrupt_payload_loads_empty() {
        for raw in ["{not json", "42", r#"{"ts":"x"}"#, r#"[{"mood":"sad"}]"#] {
            let backend = MemoryBackend::new().with_value(DEFAULT_STORAGE_KEY, raw);
            let store = HistoryStore::with_defaults(backend);
            assert!(store.all().is_empty(), "loaded something from {:?}", raw);
        }
    }

    #[test]
    fn append_persists_newest_first() {
        let mut store = HistoryStore::with_defaults(MemoryBackend::new());
        store.append(entry(1));
        store.append(entry(2));

        let raw = store.backend().raw(DEFAULT_STORAGE_KEY).unwrap();
        let stored: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(stored[0]["note"], "note 2");
        assert_eq!(stored[1]["note"], "note 1");
        assert_eq!(stored[0]["mood"], "okay");
    }

    #[test]
    fn append_caps_at_capacity() {
        let mut store = HistoryStore::open(MemoryBackend::new(), "k", 60);
        for n in 0..75 {
            store.append(entry(n));
        }

        assert_eq!(store.all().len(), 60);
        let newest = store.all().newest().unwrap();
        assert_eq!(newest.note.as_deref(), Some("note 74"));
        assert_eq!(store.all().entries()[59].note.as_deref(), Some("note 15"));
    }

    #[test]
    fn reopening_restores_the_log() {
        let mut store = HistoryStore::with_defaults(MemoryBackend::new());
        store.append(entry(1));
        store.append(entry(2));

        let reopened = HistoryStore::with_defaults(store.backend().clone());
        assert_eq!(reopened.all(), store.all());
    }

    #[test]
    fn failed_write_keeps_memory_authoritative() {
        let mut store = HistoryStore::with_defaults(MemoryBackend::new().failing_writes());

        assert_eq!(store.append(entry(1)), WriteOutcome::MemoryOnly);
        assert_eq!(store.all().len(), 1);
        assert!(store.backend().raw(DEFAULT_STORAGE_KEY).is_none());

        store.backend_mut().set_fail_writes(false);
        assert_eq!(store.append(entry(2)), WriteOutcome::Persisted);
        let reopened = HistoryStore::with_defaults(store.backend().clone());
        assert_eq!(reopened.all().len(), 2);
    }

    #[test]
    fn oversized_stored_log_is_truncated_on_load() {
        let mut big = HistoryLog::new();
        for n in 0..70 {
            big = big.record(entry(n), 100);
        }
        let raw = format::encode(&big).unwrap();
        let store = HistoryStore::with_defaults(
            MemoryBackend::new().with_value(DEFAULT_STORAGE_KEY, &raw),
        );

        assert_eq!(store.all().len(), 60);
        let newest = store.all().newest().unwrap();
        assert_eq!(newest.note.as_deref(), Some("note 69"));
    }

    #[test]
    fn file_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = HistoryStore::with_defaults(FileBackend::open(dir.path()).unwrap());
            store.append(entry(7));
        }
        let store = HistoryStore::with_defaults(FileBackend::open(dir.path()).unwrap());
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all().entries()[0].note.as_deref(), Some("note 7"));
    }
}
