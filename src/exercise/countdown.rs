//! Second-granularity countdown shared by the timed exercises.

/// Whole-second countdown clamped at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Take one second off. Never goes below zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_down_and_clamps() {
        let mut countdown = Countdown::new(2);
        assert_eq!(countdown.tick(), 1);
        assert!(!countdown.is_elapsed());
        assert_eq!(countdown.tick(), 0);
        assert!(countdown.is_elapsed());
        assert_eq!(countdown.tick(), 0);
    }

    #[test]
    fn zero_length_countdown_is_elapsed() {
        assert!(Countdown::new(0).is_elapsed());
    }
}
