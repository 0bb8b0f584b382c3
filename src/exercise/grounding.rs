//! 5-4-3-2-1 sensory grounding, walked one prompt at a time.

/// The five prompts in order.
pub const PROMPTS: [&str; 5] = [
    "Name 5 things you can SEE.",
    "Name 4 things you can TOUCH.",
    "Name 3 things you can HEAR.",
    "Name 2 things you can SMELL.",
    "Name 1 thing you can TASTE.",
];

const LAST: usize = PROMPTS.len() - 1;

/// Cursor over [`PROMPTS`], always within `0..=4`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grounding {
    cursor: usize,
}

impl Grounding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step back; stays at the first prompt.
    pub fn back(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor
    }

    /// Step forward; stays at the last prompt.
    pub fn next(&mut self) -> usize {
        self.cursor = (self.cursor + 1).min(LAST);
        self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt(&self) -> &'static str {
        PROMPTS[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Finishing is only offered on the last prompt.
    pub fn can_finish(&self) -> bool {
        self.cursor == LAST
    }

    pub fn total_steps(&self) -> usize {
        PROMPTS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_at_first_prompt_stays() {
        let mut grounding = Grounding::new();
        assert!(!grounding.can_go_back());
        assert_eq!(grounding.back(), 0);
    }

    #[test]
    fn next_at_last_prompt_stays() {
        let mut grounding = Grounding::new();
        for _ in 0..10 {
            grounding.next();
        }
        assert_eq!(grounding.cursor(), 4);
        assert_eq!(grounding.prompt(), "Name 1 thing you can TASTE.");
    }

    #[test]
    fn finish_only_on_last_prompt() {
        let mut grounding = Grounding::new();
        for expected in 1..=4 {
            assert!(!grounding.can_finish());
            assert_eq!(grounding.next(), expected);
        }
        assert!(grounding.can_finish());

        grounding.back();
        assert!(!grounding.can_finish());
    }
}
