//! The transient, single in-flight check-in.

use crate::core::MoodOption;
use crate::exercise::ExerciseKind;
use uuid::Uuid;

/// What the user has chosen so far in the current check-in.
///
/// Owned by the controller; emptied after a save or any abort navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: Uuid,
    mood: Option<MoodOption>,
    exercise: Option<ExerciseKind>,
    note: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            mood: None,
            exercise: None,
            note: String::new(),
        }
    }

    /// Correlation id for log lines; not persisted.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mood(&self) -> Option<&MoodOption> {
        self.mood.as_ref()
    }

    pub fn exercise(&self) -> Option<ExerciseKind> {
        self.exercise
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Nothing chosen or typed yet.
    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.exercise.is_none() && self.note.is_empty()
    }

    pub(crate) fn set_mood(&mut self, mood: MoodOption) {
        self.mood = Some(mood);
    }

    pub(crate) fn set_exercise(&mut self, kind: ExerciseKind) {
        self.exercise = Some(kind);
    }

    pub(crate) fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }
}
