//! Builder API for creating integrity rules.

use crate::core::DEFAULT_CAPACITY;
use crate::integrity::rules::IntegrityRules;

/// Builder for creating integrity rules
pub struct IntegrityBuilder {
    capacity: usize,
}

impl IntegrityBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the maximum number of entries
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> IntegrityRules {
        IntegrityRules {
            capacity: self.capacity,
        }
    }
}

impl Default for IntegrityBuilder {
    fn default() -> Self {
        Self::new()
    }
}
