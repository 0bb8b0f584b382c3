//! Paced breathing: a countdown plus a repeating four-step phase cycle.

use super::countdown::Countdown;
use serde::Serialize;
use strum::Display;

/// Breathing phase shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

/// Phase order; wraps indefinitely.
pub const PHASE_CYCLE: [BreathPhase; 4] = [
    BreathPhase::Inhale,
    BreathPhase::Hold,
    BreathPhase::Exhale,
    BreathPhase::Hold,
];

#[derive(Clone, Debug, PartialEq)]
pub struct Breathing {
    countdown: Countdown,
    cycle_position: usize,
}

impl Breathing {
    pub fn new(seconds: u32) -> Self {
        Self {
            countdown: Countdown::new(seconds),
            cycle_position: 0,
        }
    }

    /// One-second tick. Returns `true` once the countdown is at zero.
    pub fn tick_second(&mut self) -> bool {
        self.countdown.tick();
        self.countdown.is_elapsed()
    }

    /// Move to the next phase of the cycle.
    pub fn advance_phase(&mut self) -> BreathPhase {
        self.cycle_position = (self.cycle_position + 1) % PHASE_CYCLE.len();
        self.phase()
    }

    pub fn phase(&self) -> BreathPhase {
        PHASE_CYCLE[self.cycle_position]
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_inhale_with_full_countdown() {
        let breathing = Breathing::new(60);
        assert_eq!(breathing.phase(), BreathPhase::Inhale);
        assert_eq!(breathing.remaining_secs(), 60);
    }

    #[test]
    fn phase_cycle_wraps() {
        let mut breathing = Breathing::new(60);
        let phases: Vec<BreathPhase> = (0..5).map(|_| breathing.advance_phase()).collect();

        assert_eq!(
            phases,
            vec![
                BreathPhase::Hold,
                BreathPhase::Exhale,
                BreathPhase::Hold,
                BreathPhase::Inhale,
                BreathPhase::Hold,
            ]
        );
    }

    #[test]
    fn countdown_reports_zero_and_stays_there() {
        let mut breathing = Breathing::new(2);
        assert!(!breathing.tick_second());
        assert!(breathing.tick_second());
        assert!(breathing.tick_second());
        assert_eq!(breathing.remaining_secs(), 0);
    }
}
