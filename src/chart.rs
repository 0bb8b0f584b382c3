//! Chart projection of the history log.
//!
//! The log is stored newest-first; charts read left to right in time. The
//! projection takes the most recent entries, flips them to oldest-first and
//! numbers them from 1.

use crate::core::HistoryLog;
use serde::Serialize;

/// How many recent entries the history chart shows.
pub const DEFAULT_WINDOW: usize = 20;

/// Fixed value axis, wide enough for every catalog value.
pub const Y_DOMAIN: (f64, f64) = (0.5, 4.5);

/// Value axis ticks, one per distinct catalog value.
pub const Y_TICKS: [f64; 5] = [1.0, 1.5, 2.0, 3.0, 4.0];

const LABEL_FORMAT: &str = "%Y-%m-%d";

/// One point of the trend chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    /// 1-based position, increasing with time.
    pub index: usize,
    pub value: f64,
    /// Calendar date (UTC) of the entry.
    pub label: String,
    pub note: Option<String>,
}

/// Project the newest `limit` entries of `log` into oldest-first points.
///
/// # Example
///
/// ```rust
/// use calmly::chart::project;
/// use calmly::core::{HistoryEntry, HistoryLog, MoodId};
/// use chrono::{TimeZone, Utc};
///
/// let day = |d| Utc.with_ymd_and_hms(2024, 2, d, 9, 0, 0).unwrap();
/// let log = HistoryLog::new()
///     .record(HistoryEntry::new(MoodId::Sad.option(), "", day(1)), 60)
///     .record(HistoryEntry::new(MoodId::Happy.option(), "", day(2)), 60);
///
/// let points = project(&log, 20);
/// assert_eq!(points[0].index, 1);
/// assert_eq!(points[0].value, 2.0);
/// assert_eq!(points[0].label, "2024-02-01");
/// assert_eq!(points[1].value, 4.0);
/// ```
pub fn project(log: &HistoryLog, limit: usize) -> Vec<ChartPoint> {
    log.iter()
        .take(limit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .enumerate()
        .map(|(i, entry)| ChartPoint {
            index: i + 1,
            value: entry.value,
            label: entry.timestamp.format(LABEL_FORMAT).to_string(),
            note: entry.note.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryEntry, MoodId};
    use chrono::{Duration, TimeZone, Utc};

    fn log_with(moods: &[MoodId]) -> HistoryLog {
        // moods given oldest-first; recorded in that order so the log ends newest-first
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        moods.iter().enumerate().fold(HistoryLog::new(), |log, (i, mood)| {
            log.record(
                HistoryEntry::new(mood.option(), "", start + Duration::days(i as i64)),
                60,
            )
        })
    }

    #[test]
    fn empty_log_projects_nothing() {
        assert!(project(&HistoryLog::new(), DEFAULT_WINDOW).is_empty());
    }

    #[test]
    fn points_run_oldest_to_newest() {
        let log = log_with(&[MoodId::Angry, MoodId::Sad, MoodId::Happy]);
        let points = project(&log, DEFAULT_WINDOW);

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
        assert_eq!(values, vec![1.0, 2.0, 4.0]);
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(points[0].label, "2024-01-01");
        assert_eq!(points[2].label, "2024-01-03");
    }

    #[test]
    fn window_keeps_most_recent_entries() {
        let moods: Vec<MoodId> = (0..25)
            .map(|i| if i < 5 { MoodId::Angry } else { MoodId::Okay })
            .collect();
        let points = project(&log_with(&moods), DEFAULT_WINDOW);

        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.value == 3.0));
        assert_eq!(points.last().unwrap().index, 20);
    }

    #[test]
    fn projection_is_idempotent() {
        let log = log_with(&[MoodId::Anxious, MoodId::Okay]);
        assert_eq!(project(&log, 5), project(&log, 5));
    }

    #[test]
    fn notes_travel_with_points() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let entry = HistoryEntry::new(MoodId::Sad.option(), " rain ", ts);
        let log = HistoryLog::new().record(entry, 60);
        assert_eq!(project(&log, 1)[0].note.as_deref(), Some("rain"));
    }

    #[test]
    fn ticks_fall_inside_domain() {
        assert!(Y_TICKS.iter().all(|t| *t > Y_DOMAIN.0 && *t < Y_DOMAIN.1));
    }
}
