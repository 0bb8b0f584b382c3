//! Affirmation: one quote drawn at start and kept until the user continues.

use rand::{Rng, RngCore};

/// Affirmation pool.
pub const QUOTES: [&str; 6] = [
    "You are stronger than you think.",
    "One step at a time is still progress.",
    "This feeling is temporary. You are not.",
    "Breathe. You’ve done hard things before.",
    "You deserve rest, kindness, and patience.",
    "Small wins count. Today counts.",
];

/// A single affirmation, drawn once when the exercise starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affirmation {
    index: usize,
}

impl Affirmation {
    /// Draw uniformly from [`QUOTES`]. The choice never changes afterwards.
    pub fn draw(rng: &mut dyn RngCore) -> Self {
        Self {
            index: rng.gen_range(0..QUOTES.len()),
        }
    }

    pub fn quote(&self) -> &'static str {
        QUOTES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
