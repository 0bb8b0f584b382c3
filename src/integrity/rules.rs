//! Integrity rules for loaded history logs, built on `Validation`.

use crate::core::{normalize_note, HistoryLog};
use crate::integrity::violations::{LogViolation, Remedy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Integrity rules for a history log.
/// Uses Validation to accumulate ALL violations in one pass.
pub struct IntegrityRules {
    pub(crate) capacity: usize,
}

impl IntegrityRules {
    /// Run every rule, accumulating all violations.
    pub fn check(&self, log: &HistoryLog) -> Validation<(), NonEmptyVec<LogViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LogViolation>>> = Vec::new();

        checks.push(if log.len() > self.capacity {
            Validation::fail(LogViolation::OverCapacity {
                len: log.len(),
                capacity: self.capacity,
            })
        } else {
            Validation::success(())
        });

        for (index, entry) in log.iter().enumerate() {
            if let Some(note) = &entry.note {
                if note.trim().is_empty() {
                    checks.push(Validation::fail(LogViolation::BlankNote { index }));
                }
            }
        }

        for (index, pair) in log.entries().windows(2).enumerate() {
            if pair[1].timestamp > pair[0].timestamp {
                checks.push(Validation::fail(LogViolation::OutOfOrder {
                    index: index + 1,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Apply every repairable remedy: cap the length and null out blank
    /// notes. Ordering is left untouched.
    pub fn repair(&self, mut log: HistoryLog) -> HistoryLog {
        for entry in log.entries_mut().iter_mut() {
            if let Some(note) = entry.note.take() {
                entry.note = normalize_note(&note);
            }
        }
        log.truncated(self.capacity)
    }

    /// Check `log`, log every violation, and return the repaired log.
    pub fn enforce(&self, log: HistoryLog) -> HistoryLog {
        match self.check(&log) {
            Validation::Success(_) => log,
            Validation::Failure(violations) => {
                let mut needs_repair = false;
                for violation in violations.iter() {
                    needs_repair |= violation.remedy() == Remedy::Repair;
                    tracing::warn!(
                        %violation,
                        remedy = ?violation.remedy(),
                        "History log integrity violation"
                    );
                }
                if needs_repair {
                    self.repair(log)
                } else {
                    log
                }
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
