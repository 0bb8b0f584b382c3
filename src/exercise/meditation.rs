//! Mini meditation: a countdown with fixed guidance text.

use super::countdown::Countdown;

/// Guidance shown for the whole meditation.
pub const GUIDANCE: [&str; 4] = [
    "Close your eyes gently. Notice your breath.",
    "Inhale slowly through the nose. Exhale softly through the mouth.",
    "Let thoughts pass like clouds. Keep returning to the breath.",
    "On each exhale, release a little tension in your body.",
];

/// A short timed sit.
#[derive(Clone, Debug, PartialEq)]
pub struct Meditation {
    countdown: Countdown,
}

impl Meditation {
    pub fn new(seconds: u32) -> Self {
        Self {
            countdown: Countdown::new(seconds),
        }
    }

    /// One-second tick. Returns `true` once the countdown is at zero.
    pub fn tick_second(&mut self) -> bool {
        self.countdown.tick();
        self.countdown.is_elapsed()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn guidance(&self) -> &'static [&'static str] {
        &GUIDANCE
    }
}
