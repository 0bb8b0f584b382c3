//! Screen states of the check-in flow.
//!
//! Every state the session controller can be in implements [`State`], which
//! provides pure inspection methods used for logging and the screen trail.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position in a state machine.
///
/// # Example
///
/// ```rust
/// use calmly::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     Open,
///     Closed,
/// }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(Step::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// The five screens of the check-in flow.
    ///
    /// The flow cycles for the whole process lifetime, so no screen is final.
    #[derive(Copy, Eq, Hash)]
    pub enum Screen {
        Home,
        Support,
        Exercise,
        Closing,
        History,
    }
}

impl Screen {
    /// Screens that only make sense while a mood is selected.
    pub fn requires_mood(&self) -> bool {
        matches!(self, Self::Support | Self::Exercise | Self::Closing)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Home
    }
}
