//! Wire format of the persisted log: a JSON array of
//! `{ "ts", "mood", "value", "note" }` objects, newest first.

use super::error::StoreError;
use crate::core::{HistoryEntry, HistoryLog};

pub fn encode(log: &HistoryLog) -> Result<String, StoreError> {
    serde_json::to_string(log.entries())
        .map_err(|e| StoreError::SerializationFailed(e.to_string()))
}

pub fn decode(raw: &str) -> Result<HistoryLog, StoreError> {
    serde_json::from_str::<Vec<HistoryEntry>>(raw)
        .map(HistoryLog::from_entries)
        .map_err(|e| StoreError::DeserializationFailed(e.to_string()))
}
