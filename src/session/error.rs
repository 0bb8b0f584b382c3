//! Session controller errors.
//!
//! These all describe caller mistakes: an operation that the current screen
//! does not offer. Storage trouble never shows up here.

use super::transition::ScreenEvent;
use crate::core::Screen;
use crate::exercise::ExerciseError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("'{event}' is not available on the {from:?} screen")]
    InvalidTransition { from: Screen, event: ScreenEvent },

    #[error("Guard '{guard}' blocked '{event}' from the {from:?} screen")]
    GuardRejected {
        from: Screen,
        event: ScreenEvent,
        guard: &'static str,
    },

    #[error("Only available on the {expected:?} screen (currently {actual:?})")]
    NotOnScreen { expected: Screen, actual: Screen },

    #[error("No exercise is running")]
    NoActiveExercise,

    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}
