//! Screen transition table.

use super::error::SessionError;
use super::state::Session;
use crate::core::{Guard, Screen};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Everything that can move the flow from one screen to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScreenEvent {
    PickMood,
    ChooseExercise,
    /// The running exercise emitted its completion signal.
    Complete,
    Save,
    /// The back control on the support screen.
    Back,
    NavigateHome,
    NavigateHistory,
}

/// A single row of the table. `from: None` matches every screen.
#[derive(Clone, Debug)]
pub struct Transition {
    pub from: Option<Screen>,
    pub event: ScreenEvent,
    pub to: Screen,
    pub guard: Option<Guard<Session>>,
}

impl Transition {
    /// Check if this row applies to `event` on `current` (pure).
    pub fn matches(&self, current: Screen, event: ScreenEvent) -> bool {
        self.event == event && self.from.map_or(true, |from| from == current)
    }
}

/// Ordered transition rows; the first matching row wins.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    rows: Vec<Transition>,
}

fn mood_selected() -> Guard<Session> {
    Guard::new("mood selected", |s: &Session| s.mood().is_some())
}

fn exercise_selected() -> Guard<Session> {
    Guard::new("exercise selected", |s: &Session| {
        s.mood().is_some() && s.exercise().is_some()
    })
}

impl TransitionTable {
    /// The check-in flow.
    ///
    /// | from     | event           | to       | guard             |
    /// |----------|-----------------|----------|-------------------|
    /// | Home     | PickMood        | Support  |                   |
    /// | Support  | ChooseExercise  | Exercise | mood selected     |
    /// | Support  | Back            | Home     |                   |
    /// | Exercise | Complete        | Closing  | exercise selected |
    /// | Closing  | Save            | Home     | mood selected     |
    /// | any      | NavigateHome    | Home     |                   |
    /// | any      | NavigateHistory | History  |                   |
    pub fn check_in() -> Self {
        let row = |from: Option<Screen>, event, to, guard| Transition {
            from,
            event,
            to,
            guard,
        };
        let rows = vec![
            row(
                Some(Screen::Home),
                ScreenEvent::PickMood,
                Screen::Support,
                None,
            ),
            row(
                Some(Screen::Support),
                ScreenEvent::ChooseExercise,
                Screen::Exercise,
                Some(mood_selected()),
            ),
            row(Some(Screen::Support), ScreenEvent::Back, Screen::Home, None),
            row(
                Some(Screen::Exercise),
                ScreenEvent::Complete,
                Screen::Closing,
                Some(exercise_selected()),
            ),
            row(
                Some(Screen::Closing),
                ScreenEvent::Save,
                Screen::Home,
                Some(mood_selected()),
            ),
            row(None, ScreenEvent::NavigateHome, Screen::Home, None),
            row(None, ScreenEvent::NavigateHistory, Screen::History, None),
        ];
        Self { rows }
    }

    /// Target screen for `event` on `current`, after checking the row's guard.
    pub fn resolve(
        &self,
        current: Screen,
        event: ScreenEvent,
        session: &Session,
    ) -> Result<Screen, SessionError> {
        let row = self
            .rows
            .iter()
            .find(|row| row.matches(current, event))
            .ok_or(SessionError::InvalidTransition {
                from: current,
                event,
            })?;

        match &row.guard {
            Some(guard) if !guard.check(session) => Err(SessionError::GuardRejected {
                from: current,
                event,
                guard: guard.label(),
            }),
            _ => Ok(row.to),
        }
    }

    /// Events available on `current`, in table order.
    pub fn events_from(&self, current: Screen) -> Vec<ScreenEvent> {
        let mut events: Vec<ScreenEvent> = Vec::new();
        let matching = self
            .rows
            .iter()
            .filter(|r| r.from.map_or(true, |f| f == current));
        for row in matching {
            if !events.contains(&row.event) {
                events.push(row.event);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoodId;
    use crate::exercise::ExerciseKind;

    fn with_mood() -> Session {
        let mut session = Session::new();
        session.set_mood(*MoodId::Okay.option());
        session
    }

    #[test]
    fn happy_path_resolves() {
        let table = TransitionTable::check_in();
        let mut session = with_mood();

        assert_eq!(
            table.resolve(Screen::Home, ScreenEvent::PickMood, &Session::new()),
            Ok(Screen::Support)
        );
        assert_eq!(
            table.resolve(Screen::Support, ScreenEvent::ChooseExercise, &session),
            Ok(Screen::Exercise)
        );
        session.set_exercise(ExerciseKind::Grounding);
        assert_eq!(
            table.resolve(Screen::Exercise, ScreenEvent::Complete, &session),
            Ok(Screen::Closing)
        );
        assert_eq!(
            table.resolve(Screen::Closing, ScreenEvent::Save, &session),
            Ok(Screen::Home)
        );
    }

    #[test]
    fn choose_exercise_without_mood_is_rejected() {
        let table = TransitionTable::check_in();

        assert_eq!(
            table.resolve(
                Screen::Support,
                ScreenEvent::ChooseExercise,
                &Session::new(),
            ),
            Err(SessionError::GuardRejected {
                from: Screen::Support,
                event: ScreenEvent::ChooseExercise,
                guard: "mood selected",
            })
        );
        assert_eq!(
            table.resolve(Screen::Home, ScreenEvent::ChooseExercise, &with_mood()),
            Err(SessionError::InvalidTransition {
                from: Screen::Home,
                event: ScreenEvent::ChooseExercise,
            })
        );
    }

    #[test]
    fn navigation_is_available_everywhere() {
        let table = TransitionTable::check_in();
        for screen in [
            Screen::Home,
            Screen::Support,
            Screen::Exercise,
            Screen::Closing,
            Screen::History,
        ] {
            assert_eq!(
                table.resolve(screen, ScreenEvent::NavigateHome, &Session::new()),
                Ok(Screen::Home)
            );
            assert_eq!(
                table.resolve(screen, ScreenEvent::NavigateHistory, &Session::new()),
                Ok(Screen::History)
            );
        }
    }

    #[test]
    fn save_only_from_closing() {
        let table = TransitionTable::check_in();
        assert!(table
            .resolve(Screen::Exercise, ScreenEvent::Save, &with_mood())
            .is_err());
    }

    #[test]
    fn lists_events_per_screen() {
        let table = TransitionTable::check_in();
        assert_eq!(
            table.events_from(Screen::Support),
            vec![
                ScreenEvent::ChooseExercise,
                ScreenEvent::Back,
                ScreenEvent::NavigateHome,
                ScreenEvent::NavigateHistory,
            ]
        );
        assert_eq!(
            table.events_from(Screen::History),
            vec![ScreenEvent::NavigateHome, ScreenEvent::NavigateHistory]
        );
    }

    #[test]
    fn event_names_are_snake_case() {
        assert_eq!(ScreenEvent::NavigateHistory.to_string(), "navigate_history");
    }
}
