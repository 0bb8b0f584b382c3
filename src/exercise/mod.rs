//! Coping exercises and the runner that drives them.
//!
//! Every exercise is started through [`ExerciseRunner::start`] and shares one
//! contract:
//!
//! - a finish request (finish early, finish, continue)
//! - exactly one [`Completion`], however completion is reached
//! - [`ExerciseRunner::dispose`] cancels every timer the runner registered
//!
//! Timed exercises register periodic tasks on the controller's
//! [`Scheduler`]; the controller feeds fired tasks back through
//! [`ExerciseRunner::on_timer`].

mod affirmation;
mod breathing;
mod countdown;
mod grounding;
mod meditation;

pub use affirmation::{Affirmation, QUOTES};
pub use breathing::{BreathPhase, Breathing, PHASE_CYCLE};
pub use countdown::Countdown;
pub use grounding::{Grounding, PROMPTS};
pub use meditation::{Meditation, GUIDANCE};

use crate::schedule::{Fired, Scheduler, TaskId};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{Display, EnumIter};
use thiserror::Error;

/// Which exercise to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExerciseKind {
    Breathing,
    Grounding,
    Meditation,
    Affirmation,
}

impl ExerciseKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Breathing => "Breathing",
            Self::Grounding => "5-4-3-2-1 Grounding",
            Self::Meditation => "Mini Meditation",
            Self::Affirmation => "Affirmation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Breathing => "1-minute guided breathing",
            Self::Grounding => "5-4-3-2-1 sensory grounding",
            Self::Meditation => "2-minute mini meditation",
            Self::Affirmation => "Get an affirmation",
        }
    }
}

/// Durations used when starting timed exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseSettings {
    pub breathing_seconds: u32,
    pub breathing_phase: Duration,
    pub meditation_seconds: u32,
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self {
            breathing_seconds: 60,
            breathing_phase: Duration::from_secs(4),
            meditation_seconds: 120,
        }
    }
}

/// Tag carried by scheduler tasks owned by exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// One-second countdown tick.
    Countdown,
    /// Breathing phase change.
    Phase,
}

/// How an exercise came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum CompletionReason {
    TimerExpired,
    FinishedEarly,
    StepsCompleted,
    Continued,
}

/// The one-time signal handing control back to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub kind: ExerciseKind,
    pub reason: CompletionReason,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExerciseError {
    #[error("Grounding can only finish on the last prompt (currently on {step} of {total})")]
    FinishUnavailable { step: usize, total: usize },

    #[error("'{0}' has no step controls")]
    NotStepped(ExerciseKind),
}

/// Per-variant exercise state.
#[derive(Clone, Debug, PartialEq)]
pub enum Exercise {
    Breathing(Breathing),
    Grounding(Grounding),
    Meditation(Meditation),
    Affirmation(Affirmation),
}

/// Read-only snapshot for rendering the exercise screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "exercise", rename_all = "lowercase")]
pub enum ExerciseView {
    Breathing {
        remaining_secs: u32,
        phase: BreathPhase,
    },
    Grounding {
        step: usize,
        total: usize,
        prompt: &'static str,
        can_go_back: bool,
        can_finish: bool,
    },
    Meditation {
        remaining_secs: u32,
        guidance: &'static [&'static str],
    },
    Affirmation {
        quote: &'static str,
    },
}

/// A started exercise with its timers and completion latch.
#[derive(Debug)]
pub struct ExerciseRunner {
    kind: ExerciseKind,
    exercise: Exercise,
    timers: Vec<TaskId>,
    completed: bool,
    disposed: bool,
}

impl ExerciseRunner {
    /// Start `kind`, registering its timers on `scheduler`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calmly::exercise::{ExerciseKind, ExerciseRunner, ExerciseSettings};
    /// use calmly::schedule::Scheduler;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut scheduler = Scheduler::new();
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut runner = ExerciseRunner::start(
    ///     ExerciseKind::Meditation,
    ///     &ExerciseSettings::default(),
    ///     &mut scheduler,
    ///     &mut rng,
    /// );
    ///
    /// assert_eq!(scheduler.pending(), 1);
    /// let done = runner.request_finish().unwrap();
    /// assert!(done.is_some());
    /// runner.dispose(&mut scheduler);
    /// assert_eq!(scheduler.pending(), 0);
    /// ```
    pub fn start(
        kind: ExerciseKind,
        settings: &ExerciseSettings,
        scheduler: &mut Scheduler<TimerKind>,
        rng: &mut dyn RngCore,
    ) -> Self {
        let second = Duration::from_secs(1);
        let (exercise, timers) = match kind {
            ExerciseKind::Breathing => (
                Exercise::Breathing(Breathing::new(settings.breathing_seconds)),
                vec![
                    scheduler.schedule_every(second, TimerKind::Countdown),
                    scheduler.schedule_every(settings.breathing_phase, TimerKind::Phase),
                ],
            ),
            ExerciseKind::Meditation => (
                Exercise::Meditation(Meditation::new(settings.meditation_seconds)),
                vec![scheduler.schedule_every(second, TimerKind::Countdown)],
            ),
            ExerciseKind::Grounding => (Exercise::Grounding(Grounding::new()), Vec::new()),
            ExerciseKind::Affirmation => (
                Exercise::Affirmation(Affirmation::draw(rng)),
                Vec::new(),
            ),
        };

        tracing::debug!(exercise = %kind, timers = timers.len(), "Exercise started");

        Self {
            kind,
            exercise,
            timers,
            completed: false,
            disposed: false,
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Handle a fired scheduler task.
    ///
    /// Tasks this runner does not own, and any task arriving after disposal
    /// or completion, are ignored.
    pub fn on_timer(&mut self, fired: Fired<TimerKind>) -> Option<Completion> {
        if self.disposed || self.completed || !self.timers.contains(&fired.task) {
            return None;
        }

        let expired = match (&mut self.exercise, fired.tag) {
            (Exercise::Breathing(b), TimerKind::Countdown) => b.tick_second(),
            (Exercise::Breathing(b), TimerKind::Phase) => {
                b.advance_phase();
                false
            }
            (Exercise::Meditation(m), TimerKind::Countdown) => m.tick_second(),
            _ => false,
        };

        if expired {
            self.complete(CompletionReason::TimerExpired)
        } else {
            None
        }
    }

    /// Ask the exercise to end now.
    ///
    /// Timed exercises always accept (finish early); affirmation accepts
    /// (continue); grounding accepts only on its last prompt. Returns
    /// `Ok(None)` when the signal was already emitted or the runner is
    /// disposed.
    pub fn request_finish(&mut self) -> Result<Option<Completion>, ExerciseError> {
        let reason = match &self.exercise {
            Exercise::Breathing(_) | Exercise::Meditation(_) => CompletionReason::FinishedEarly,
            Exercise::Affirmation(_) => CompletionReason::Continued,
            Exercise::Grounding(g) if g.can_finish() => CompletionReason::StepsCompleted,
            Exercise::Grounding(g) => {
                return Err(ExerciseError::FinishUnavailable {
                    step: g.cursor() + 1,
                    total: g.total_steps(),
                })
            }
        };
        Ok(self.complete(reason))
    }

    /// Step controls; only grounding has them.
    pub fn grounding_mut(&mut self) -> Result<&mut Grounding, ExerciseError> {
        match &mut self.exercise {
            Exercise::Grounding(g) => Ok(g),
            _ => Err(ExerciseError::NotStepped(self.kind)),
        }
    }

    /// Cancel every timer this runner registered. Safe to call repeatedly.
    pub fn dispose(&mut self, scheduler: &mut Scheduler<TimerKind>) {
        for task in self.timers.drain(..) {
            scheduler.cancel(task);
        }
        if !self.disposed {
            self.disposed = true;
            tracing::debug!(exercise = %self.kind, completed = self.completed, "Exercise disposed");
        }
    }

    pub fn view(&self) -> ExerciseView {
        match &self.exercise {
            Exercise::Breathing(b) => ExerciseView::Breathing {
                remaining_secs: b.remaining_secs(),
                phase: b.phase(),
            },
            Exercise::Grounding(g) => ExerciseView::Grounding {
                step: g.cursor() + 1,
                total: g.total_steps(),
                prompt: g.prompt(),
                can_go_back: g.can_go_back(),
                can_finish: g.can_finish(),
            },
            Exercise::Meditation(m) => ExerciseView::Meditation {
                remaining_secs: m.remaining_secs(),
                guidance: m.guidance(),
            },
            Exercise::Affirmation(a) => ExerciseView::Affirmation { quote: a.quote() },
        }
    }

    fn complete(&mut self, reason: CompletionReason) -> Option<Completion> {
        if self.completed || self.disposed {
            return None;
        }
        self.completed = true;
        Some(Completion {
            kind: self.kind,
            reason,
        })
    }
}
