//! Durable key-value backends for the history log.

use super::error::BackendError;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Minimal string key-value storage.
///
/// The history store reads once at startup and writes after every append.
pub trait KeyValueBackend {
    /// Read the value under `key`; `Ok(None)` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replace the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), BackendError>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).write(key, value)
    }
}

/// In-memory backend, mainly for tests.
///
/// Writes can be made to fail to exercise the store's degraded path.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, as if written by an earlier process.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent write fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value, for asserting the serialized form.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        if self.fail_writes {
            return Err(BackendError::Unavailable(format!(
                "writes disabled for '{}'",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| BackendError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn io_error(key: &str) -> impl FnOnce(std::io::Error) -> BackendError + '_ {
        move |source| BackendError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key)(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        let mut file = File::create(&tmp).map_err(Self::io_error(key))?;
        file.write_all(value.as_bytes())
            .map_err(Self::io_error(key))?;
        file.sync_all().map_err(Self::io_error(key))?;
        drop(file);

        fs::rename(&tmp, &path).map_err(Self::io_error(key))
    }
}
