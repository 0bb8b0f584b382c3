//! Fluent construction of a [`SessionController`].
//!
//! The builder gathers the controller's collaborators (storage backend,
//! clock, random source, help launcher) and the [`CalmlyConfig`] values, then
//! validates them in [`ControllerBuilder::build`].

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::clock::{Clock, SystemClock};
use crate::config::CalmlyConfig;
use crate::core::Screen;
use crate::help::{BrowserLauncher, HelpLauncher};
use crate::schedule::Scheduler;
use crate::session::{ScreenTrail, Session, SessionController, TransitionTable};
use crate::store::{FileBackend, HistoryStore, KeyValueBackend};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Builder for [`SessionController`].
///
/// # Example
///
/// ```
/// use calmly::builder::ControllerBuilder;
/// use calmly::core::{MoodId, Screen};
/// use calmly::help::RecordingLauncher;
/// use calmly::store::MemoryBackend;
///
/// let mut controller = ControllerBuilder::new()
///     .backend(MemoryBackend::new())
///     .launcher(RecordingLauncher::new())
///     .build()
///     .unwrap();
///
/// controller.pick_mood(MoodId::Okay).unwrap();
/// assert_eq!(controller.screen(), Screen::Support);
/// ```
pub struct ControllerBuilder<B: KeyValueBackend> {
    backend: Option<B>,
    config: CalmlyConfig,
    rng: Option<Box<dyn RngCore + Send>>,
    clock: Option<Box<dyn Clock>>,
    launcher: Option<Box<dyn HelpLauncher>>,
}

impl<B: KeyValueBackend> ControllerBuilder<B> {
    pub fn new() -> Self {
        Self {
            backend: None,
            config: CalmlyConfig::default(),
            rng: None,
            clock: None,
            launcher: None,
        }
    }

    /// Set the storage backend (required).
    pub fn backend(mut self, backend: B) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn config(mut self, config: CalmlyConfig) -> Self {
        self.config = config;
        self
    }

    /// Random source for affirmation draws. Defaults to an entropy-seeded
    /// [`StdRng`].
    pub fn rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Timestamp source for saved entries. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Urgent-help opener. Defaults to [`BrowserLauncher`].
    pub fn launcher(mut self, launcher: impl HelpLauncher + 'static) -> Self {
        self.launcher = Some(Box::new(launcher));
        self
    }

    /// Validate the configuration, load history and return a controller on
    /// the Home screen.
    pub fn build(self) -> Result<SessionController<B>, BuildError> {
        let backend = self.backend.ok_or(BuildError::MissingBackend)?;
        let config = self.config;

        if config.history_capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }
        if config.chart_window == 0 {
            return Err(BuildError::ZeroChartWindow);
        }
        if config.storage_key.trim().is_empty() {
            return Err(BuildError::EmptyStorageKey);
        }
        for (field, seconds) in [
            ("breathing_seconds", u64::from(config.breathing_seconds)),
            ("breathing_phase_seconds", config.breathing_phase_seconds),
            ("meditation_seconds", u64::from(config.meditation_seconds)),
        ] {
            if seconds == 0 {
                return Err(BuildError::ZeroDuration { field });
            }
        }

        let store = HistoryStore::open(
            backend,
            config.storage_key.clone(),
            config.history_capacity,
        );
        tracing::debug!(
            help_url = %config.help_url,
            chart_window = config.chart_window,
            "Controller built"
        );

        Ok(SessionController {
            screen: Screen::default(),
            session: Session::new(),
            runner: None,
            scheduler: Scheduler::new(),
            table: TransitionTable::check_in(),
            store,
            trail: ScreenTrail::new(),
            settings: config.exercise_settings(),
            chart_window: config.chart_window,
            help_url: config.help_url,
            rng: self.rng.unwrap_or_else(|| Box::new(StdRng::from_entropy())),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            launcher: self.launcher.unwrap_or_else(|| Box::new(BrowserLauncher)),
        })
    }
}

impl ControllerBuilder<FileBackend> {
    /// Builder storing history under the config's data directory.
    pub fn file_backed(config: CalmlyConfig) -> Result<Self, BuildError> {
        let backend = FileBackend::open(config.resolved_data_dir())?;
        Ok(Self::new().backend(backend).config(config))
    }
}

impl<B: KeyValueBackend> Default for ControllerBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoodId;
    use crate::store::MemoryBackend;

    fn base() -> ControllerBuilder<MemoryBackend> {
        ControllerBuilder::new()
            .backend(MemoryBackend::new())
            .launcher(crate::help::RecordingLauncher::new())
    }

    #[test]
    fn build_requires_backend() {
        let result = ControllerBuilder::<MemoryBackend>::new().build();
        assert!(matches!(result, Err(BuildError::MissingBackend)));
    }

    #[test]
    fn build_rejects_zero_capacity() {
        let config = CalmlyConfig {
            history_capacity: 0,
            ..CalmlyConfig::default()
        };
        assert!(matches!(
            base().config(config).build(),
            Err(BuildError::ZeroCapacity)
        ));
    }

    #[test]
    fn build_rejects_zero_chart_window() {
        let config = CalmlyConfig {
            chart_window: 0,
            ..CalmlyConfig::default()
        };
        assert!(matches!(
            base().config(config).build(),
            Err(BuildError::ZeroChartWindow)
        ));
    }

    #[test]
    fn build_rejects_blank_key() {
        let config = CalmlyConfig {
            storage_key: "  ".into(),
            ..CalmlyConfig::default()
        };
        assert!(matches!(
            base().config(config).build(),
            Err(BuildError::EmptyStorageKey)
        ));
    }

    #[test]
    fn build_rejects_zero_exercise_durations() {
        let phase = CalmlyConfig {
            breathing_phase_seconds: 0,
            ..CalmlyConfig::default()
        };
        assert!(matches!(
            base().config(phase).build(),
            Err(BuildError::ZeroDuration {
                field: "breathing_phase_seconds"
            })
        ));

        let breathing = CalmlyConfig {
            breathing_seconds: 0,
            ..CalmlyConfig::default()
        };
        assert!(matches!(
            base().config(breathing).build(),
            Err(BuildError::ZeroDuration {
                field: "breathing_seconds"
            })
        ));

        let meditation = CalmlyConfig {
            meditation_seconds: 0,
            ..CalmlyConfig::default()
        };
        assert!(matches!(
            base().config(meditation).build(),
            Err(BuildError::ZeroDuration {
                field: "meditation_seconds"
            })
        ));
    }

    #[test]
    fn built_controller_starts_home() {
        let controller = base().build().unwrap();
        assert_eq!(controller.screen(), Screen::Home);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn custom_key_is_used_for_loading() {
        let payload = r#"[{"ts":"2024-05-01T10:00:00.000Z","mood":"happy","value":4}]"#;
        let config = CalmlyConfig {
            storage_key: "other".into(),
            ..CalmlyConfig::default()
        };
        let controller = ControllerBuilder::new()
            .backend(MemoryBackend::new().with_value("other", payload))
            .config(config)
            .launcher(crate::help::RecordingLauncher::new())
            .build()
            .unwrap();

        let newest = controller.history().newest().map(|e| e.mood);
        assert_eq!(newest, Some(MoodId::Happy));
    }

    #[test]
    fn file_backed_builder_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalmlyConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..CalmlyConfig::default()
        };
        let controller = ControllerBuilder::file_backed(config)
            .unwrap()
            .launcher(crate::help::RecordingLauncher::new())
            .build()
            .unwrap();

        assert_eq!(controller.store().backend().dir(), dir.path());
    }
}
