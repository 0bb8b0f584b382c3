//! Guard predicates for controlling transitions.
//!
//! A guard is a named, pure predicate over some context value. The session
//! transition table uses guards to express preconditions such as "a mood has
//! been picked" without scattering checks through the controller.

use std::fmt;
use std::sync::Arc;

/// Pure, named predicate that decides whether a transition may run.
///
/// # Example
///
/// ```rust
/// use calmly::core::Guard;
///
/// let non_empty = Guard::new("non-empty", |s: &String| !s.is_empty());
///
/// assert!(non_empty.check(&"calm".to_string()));
/// assert!(!non_empty.check(&String::new()));
/// assert_eq!(non_empty.label(), "non-empty");
/// ```
pub struct Guard<C> {
    label: &'static str,
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a label and a pure predicate.
    pub fn new<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against `context`.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }

    /// Label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}
