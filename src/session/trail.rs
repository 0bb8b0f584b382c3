//! Bounded record of screen transitions, kept for diagnostics.

use super::transition::ScreenEvent;
use crate::core::Screen;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Steps kept before the oldest are dropped.
pub const TRAIL_LIMIT: usize = 256;

/// A single screen change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrailStep {
    pub from: Screen,
    pub to: Screen,
    pub event: ScreenEvent,
    pub at: DateTime<Utc>,
}

/// Screen changes in the order they happened, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ScreenTrail {
    steps: VecDeque<TrailStep>,
}

impl ScreenTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: TrailStep) {
        if self.steps.len() == TRAIL_LIMIT {
            self.steps.pop_front();
        }
        self.steps.push_back(step);
    }

    pub fn steps(&self) -> impl Iterator<Item = &TrailStep> {
        self.steps.iter()
    }

    /// Screens visited: the first step's origin, then every destination.
    pub fn path(&self) -> Vec<Screen> {
        self.steps
            .front()
            .map(|first| first.from)
            .into_iter()
            .chain(self.steps.iter().map(|s| s.to))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: Screen, to: Screen, event: ScreenEvent) -> TrailStep {
        TrailStep {
            from,
            to,
            event,
            at: Utc::now(),
        }
    }

    #[test]
    fn empty_trail_has_no_path() {
        assert!(ScreenTrail::new().path().is_empty());
    }

    #[test]
    fn path_lists_visited_screens() {
        let mut trail = ScreenTrail::new();
        trail.record(step(Screen::Home, Screen::Support, ScreenEvent::PickMood));
        trail.record(step(Screen::Support, Screen::Home, ScreenEvent::Back));

        assert_eq!(
            trail.path(),
            vec![Screen::Home, Screen::Support, Screen::Home]
        );
    }

    #[test]
    fn trail_is_bounded() {
        let mut trail = ScreenTrail::new();
        for _ in 0..TRAIL_LIMIT + 10 {
            trail.record(step(
                Screen::Home,
                Screen::History,
                ScreenEvent::NavigateHistory,
            ));
        }
        assert_eq!(trail.len(), TRAIL_LIMIT);
    }
}
