//! The check-in state machine.

use super::error::SessionError;
use super::state::Session;
use super::trail::{ScreenTrail, TrailStep};
use super::transition::{ScreenEvent, TransitionTable};
use crate::chart::{self, ChartPoint};
use crate::clock::Clock;
use crate::core::{HistoryEntry, HistoryLog, MoodId, Screen, State};
use crate::exercise::{
    Completion, ExerciseKind, ExerciseRunner, ExerciseSettings, ExerciseView, TimerKind,
};
use crate::help::HelpLauncher;
use crate::schedule::Scheduler;
use crate::store::{HistoryStore, KeyValueBackend, WriteOutcome};
use rand::RngCore;
use std::time::Duration;

/// Drives the flow Home → Support → Exercise → Closing → Home.
///
/// The controller owns the session, the running exercise and its scheduler,
/// and the history store. All input arrives through its methods, one at a
/// time: user actions, and [`advance`](Self::advance) for the passage of
/// time. Build one with [`ControllerBuilder`](crate::builder::ControllerBuilder).
pub struct SessionController<B: KeyValueBackend> {
    pub(crate) screen: Screen,
    pub(crate) session: Session,
    pub(crate) runner: Option<ExerciseRunner>,
    pub(crate) scheduler: Scheduler<TimerKind>,
    pub(crate) table: TransitionTable,
    pub(crate) store: HistoryStore<B>,
    pub(crate) trail: ScreenTrail,
    pub(crate) settings: ExerciseSettings,
    pub(crate) chart_window: usize,
    pub(crate) help_url: String,
    pub(crate) rng: Box<dyn RngCore + Send>,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) launcher: Box<dyn HelpLauncher>,
}

impl<B: KeyValueBackend> SessionController<B> {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn trail(&self) -> &ScreenTrail {
        &self.trail
    }

    pub fn store(&self) -> &HistoryStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HistoryStore<B> {
        &mut self.store
    }

    /// Newest-first history.
    pub fn history(&self) -> &HistoryLog {
        self.store.all()
    }

    /// Chart points for the history screen.
    pub fn chart(&self) -> Vec<ChartPoint> {
        chart::project(self.store.all(), self.chart_window)
    }

    /// Supportive message for the picked mood.
    pub fn support_message(&self) -> Option<&'static str> {
        self.session.mood().map(|m| m.support_message)
    }

    /// Snapshot of the running exercise, if any.
    pub fn exercise_view(&self) -> Option<ExerciseView> {
        self.runner.as_ref().map(ExerciseRunner::view)
    }

    /// Events the current screen accepts.
    pub fn available_events(&self) -> Vec<ScreenEvent> {
        self.table.events_from(self.screen)
    }

    /// Scheduler time, i.e. how much time the host has fed in.
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pick_mood(&mut self, mood: MoodId) -> Result<(), SessionError> {
        let to = self.resolve(ScreenEvent::PickMood)?;
        self.session.set_mood(*mood.option());
        tracing::info!(session = %self.session.id(), mood = %mood, "Mood picked");
        self.go(to, ScreenEvent::PickMood);
        Ok(())
    }

    pub fn choose_exercise(&mut self, kind: ExerciseKind) -> Result<(), SessionError> {
        let to = self.resolve(ScreenEvent::ChooseExercise)?;
        self.session.set_exercise(kind);
        self.dispose_runner();
        self.runner = Some(ExerciseRunner::start(
            kind,
            &self.settings,
            &mut self.scheduler,
            self.rng.as_mut(),
        ));
        self.go(to, ScreenEvent::ChooseExercise);
        Ok(())
    }

    /// Feed `by` of elapsed time to the running exercise. The scheduler
    /// clock saturates at [`Duration::MAX`].
    ///
    /// Due timer callbacks are delivered one at a time. If one completes the
    /// exercise, the runner is disposed and the flow moves to Closing before
    /// anything else is delivered; the remaining callbacks of that runner are
    /// cancelled with it.
    pub fn advance(&mut self, by: Duration) -> Option<Completion> {
        let deadline = self.scheduler.now().saturating_add(by);
        let mut completed = None;

        while let Some(fired) = self.scheduler.pop_due(deadline) {
            let Some(runner) = self.runner.as_mut() else {
                tracing::debug!(task = ?fired.task, "Timer fired with no exercise running");
                continue;
            };
            if let Some(completion) = runner.on_timer(fired) {
                self.on_completion(completion);
                completed = Some(completion);
            }
        }

        self.scheduler.settle(deadline);
        completed
    }

    /// The exercise's own finish control: "finish early" for timed
    /// exercises, "finish" on grounding's last prompt, "continue" for an
    /// affirmation.
    pub fn finish_exercise(&mut self) -> Result<Option<Completion>, SessionError> {
        self.expect_screen(Screen::Exercise)?;
        let runner = self.runner.as_mut().ok_or(SessionError::NoActiveExercise)?;

        let completion = runner.request_finish()?;
        if let Some(completion) = completion {
            self.on_completion(completion);
        }
        Ok(completion)
    }

    /// Next grounding prompt; returns the new cursor.
    pub fn grounding_next(&mut self) -> Result<usize, SessionError> {
        self.expect_screen(Screen::Exercise)?;
        let runner = self.runner.as_mut().ok_or(SessionError::NoActiveExercise)?;
        Ok(runner.grounding_mut()?.next())
    }

    /// Previous grounding prompt; returns the new cursor.
    pub fn grounding_back(&mut self) -> Result<usize, SessionError> {
        self.expect_screen(Screen::Exercise)?;
        let runner = self.runner.as_mut().ok_or(SessionError::NoActiveExercise)?;
        Ok(runner.grounding_mut()?.back())
    }

    /// Replace the closing note.
    pub fn set_note(&mut self, note: impl Into<String>) -> Result<(), SessionError> {
        self.expect_screen(Screen::Closing)?;
        self.session.set_note(note);
        Ok(())
    }

    /// Save the check-in and return Home.
    ///
    /// The returned outcome tells whether the entry reached durable storage;
    /// either way the entry is in the in-memory history and the session is
    /// reset.
    pub fn save(&mut self) -> Result<WriteOutcome, SessionError> {
        let to = self.resolve(ScreenEvent::Save)?;
        let Some(mood) = self.session.mood() else {
            return Err(SessionError::GuardRejected {
                from: self.screen,
                event: ScreenEvent::Save,
                guard: "mood selected",
            });
        };

        let entry = HistoryEntry::new(mood, self.session.note(), self.clock.now());
        tracing::info!(
            session = %self.session.id(),
            mood = %entry.mood,
            has_note = entry.note.is_some(),
            "Check-in saved"
        );
        let outcome = self.store.append(entry);

        self.session = Session::new();
        self.go(to, ScreenEvent::Save);
        Ok(outcome)
    }

    /// Back control on the support screen; discards the session.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.abort(ScreenEvent::Back)
    }

    /// Persistent Home control. Discards any in-progress session.
    pub fn navigate_home(&mut self) {
        let aborted = self.abort(ScreenEvent::NavigateHome);
        debug_assert!(aborted.is_ok(), "navigate home matches every screen");
    }

    /// Persistent History control. Discards any in-progress session.
    pub fn navigate_history(&mut self) {
        let aborted = self.abort(ScreenEvent::NavigateHistory);
        debug_assert!(aborted.is_ok(), "navigate history matches every screen");
    }

    /// Open the urgent-help resource. Failures are logged, never raised.
    pub fn request_urgent_help(&mut self) {
        match self.launcher.open(&self.help_url) {
            Ok(()) => tracing::info!(url = %self.help_url, "Opened urgent help"),
            Err(e) => {
                tracing::warn!(url = %self.help_url, error = %e, "Could not open urgent help")
            }
        }
    }

    fn abort(&mut self, event: ScreenEvent) -> Result<(), SessionError> {
        let to = self.resolve(event)?;
        self.dispose_runner();
        if !self.session.is_empty() {
            tracing::info!(
                session = %self.session.id(),
                from = self.screen.name(),
                %event,
                "Check-in abandoned without saving"
            );
        }
        self.session = Session::new();
        self.go(to, event);
        Ok(())
    }

    fn on_completion(&mut self, completion: Completion) {
        tracing::info!(
            session = %self.session.id(),
            exercise = %completion.kind,
            reason = %completion.reason,
            "Exercise completed"
        );
        self.dispose_runner();
        match self.resolve(ScreenEvent::Complete) {
            Ok(to) => self.go(to, ScreenEvent::Complete),
            Err(e) => tracing::warn!(error = %e, "Completion ignored"),
        }
    }

    fn dispose_runner(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.dispose(&mut self.scheduler);
        }
    }

    fn resolve(&self, event: ScreenEvent) -> Result<Screen, SessionError> {
        self.table.resolve(self.screen, event, &self.session)
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), SessionError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(SessionError::NotOnScreen {
                expected,
                actual: self.screen,
            })
        }
    }

    fn go(&mut self, to: Screen, event: ScreenEvent) {
        let from = self.screen;
        self.trail.record(TrailStep {
            from,
            to,
            event,
            at: self.clock.now(),
        });
        tracing::debug!(from = from.name(), to = to.name(), %event, "Screen transition");
        self.screen = to;
        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            !self.screen.requires_mood() || self.session.mood().is_some(),
            "{} screen reached without a selected mood",
            self.screen.name()
        );
        debug_assert_eq!(
            self.screen == Screen::Exercise,
            self.runner.is_some(),
            "a runner exists exactly while the Exercise screen is shown"
        );
    }
}
