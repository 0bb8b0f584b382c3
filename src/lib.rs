//! Calmly: a guided self-check-in core
//!
//! A check-in walks through a fixed set of screens: the user picks a mood,
//! reads a supportive message, runs a short coping exercise, optionally
//! writes a note, and saves. Saved check-ins land in a capped, newest-first
//! history that can be projected into chart points.
//!
//! The pure parts (mood catalog, history log, chart projection, transition
//! table) do no I/O. Side effects sit at the edges behind small traits:
//! storage ([`store::KeyValueBackend`]), wall-clock time ([`clock::Clock`]),
//! and the urgent-help link ([`help::HelpLauncher`]). Exercise timers run on
//! a virtual clock that the host advances explicitly.
//!
//! # Core Concepts
//!
//! - **Screen**: where the flow is, via the `State` trait
//! - **Session**: the single in-flight check-in
//! - **Exercise runner**: one coping exercise with one completion signal
//! - **History store**: durable, capped log of saved check-ins
//!
//! # Example
//!
//! ```rust
//! use calmly::builder::ControllerBuilder;
//! use calmly::core::{MoodId, Screen};
//! use calmly::exercise::ExerciseKind;
//! use calmly::help::RecordingLauncher;
//! use calmly::store::MemoryBackend;
//! use std::time::Duration;
//!
//! let mut controller = ControllerBuilder::new()
//!     .backend(MemoryBackend::new())
//!     .launcher(RecordingLauncher::new())
//!     .build()
//!     .unwrap();
//!
//! controller.pick_mood(MoodId::Okay).unwrap();
//! controller.choose_exercise(ExerciseKind::Breathing).unwrap();
//! controller.advance(Duration::from_secs(60));
//! assert_eq!(controller.screen(), Screen::Closing);
//!
//! controller.set_note("steadier now").unwrap();
//! controller.save().unwrap();
//! assert_eq!(controller.history().len(), 1);
//! ```

pub mod builder;
pub mod chart;
pub mod clock;
pub mod config;
pub mod core;
pub mod exercise;
pub mod help;
pub mod integrity;
pub mod schedule;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use chart::ChartPoint;
pub use config::CalmlyConfig;
pub use core::{HistoryEntry, HistoryLog, MoodCatalog, MoodId, MoodOption, Screen, State};
pub use exercise::{Completion, CompletionReason, ExerciseKind, ExerciseView};
pub use session::{SessionController, SessionError};
pub use store::{HistoryStore, WriteOutcome};
