//! Application configuration, read from an optional TOML file.
//!
//! Every field has a default, so an empty or missing file yields the stock
//! behavior.

use crate::chart::DEFAULT_WINDOW;
use crate::core::DEFAULT_CAPACITY;
use crate::exercise::ExerciseSettings;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HELP_URL: &str = "https://www.google.com/search?q=mental+health+hotline+Tunisia";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalmlyConfig {
    /// Backend key the history log is stored under.
    pub storage_key: String,
    pub history_capacity: usize,
    /// Number of recent entries shown on the chart.
    pub chart_window: usize,
    pub breathing_seconds: u32,
    pub breathing_phase_seconds: u64,
    pub meditation_seconds: u32,
    pub help_url: String,
    /// Directory for the file backend. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for CalmlyConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_capacity: DEFAULT_CAPACITY,
            chart_window: DEFAULT_WINDOW,
            breathing_seconds: 60,
            breathing_phase_seconds: 4,
            meditation_seconds: 120,
            help_url: DEFAULT_HELP_URL.to_string(),
            data_dir: None,
        }
    }
}

impl CalmlyConfig {
    /// Load from `path`. A missing file gives the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Platform config file location, e.g. `~/.config/calmly/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calmly").join("config.toml"))
    }

    /// Directory for the file backend.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("calmly")
        })
    }

    pub fn exercise_settings(&self) -> ExerciseSettings {
        ExerciseSettings {
            breathing_seconds: self.breathing_seconds,
            breathing_phase: Duration::from_secs(self.breathing_phase_seconds),
            meditation_seconds: self.meditation_seconds,
        }
    }
}
