//! The always-available "urgent help" link.

use std::io;
use std::sync::{Arc, Mutex};

/// Opens an external help resource. Fire-and-forget from the caller's side.
pub trait HelpLauncher: Send {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// Opens the URL in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl HelpLauncher for BrowserLauncher {
    fn open(&mut self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

/// Records requested URLs instead of opening them.
///
/// Clones share the same record, so a test can keep one handle and give the
/// other to the controller.
#[derive(Debug, Default, Clone)]
pub struct RecordingLauncher {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl HelpLauncher for RecordingLauncher {
    fn open(&mut self, url: &str) -> io::Result<()> {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());
        Ok(())
    }
}

/// Launcher whose every attempt fails, for exercising the degraded path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingLauncher;

impl HelpLauncher for FailingLauncher {
    fn open(&mut self, _url: &str) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no browser available",
        ))
    }
}
