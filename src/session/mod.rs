//! The in-progress check-in and the controller that walks it through the
//! screens.
//!
//! [`TransitionTable`] decides where an event leads; [`SessionController`]
//! applies it, owns the running exercise, and writes finished check-ins to
//! the history store.

mod controller;
mod error;
mod state;
mod trail;
mod transition;

pub use controller::SessionController;
pub use error::SessionError;
pub use state::Session;
pub use trail::{ScreenTrail, TrailStep, TRAIL_LIMIT};
pub use transition::{ScreenEvent, Transition, TransitionTable};
