//! Recording launcher for testing
//!
//! Captures launch requests instead of starting anything, and can be told to
//! fail so error paths can be exercised.

use super::Launcher;
use crate::error::{Error, Result};
use std::cell::RefCell;

/// A launch request captured by [`RecordingLauncher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCall {
    ShellOpen(String),
    OpenPath(String),
}

#[derive(Debug, Default)]
pub struct RecordingLauncher {
    calls: RefCell<Vec<LaunchCall>>,
    failure: Option<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a launcher whose every launch fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    /// Requests seen so far, including failed ones.
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: LaunchCall, target: &str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Err(Error::launch(target, message)),
            None => Ok(()),
        }
    }
}

impl Launcher for RecordingLauncher {
    fn shell_open(&self, command: &str) -> Result<()> {
        self.record(LaunchCall::ShellOpen(command.to_string()), command)
    }

    fn open_path(&self, path: &str) -> Result<()> {
        self.record(LaunchCall::OpenPath(path.to_string()), path)
    }
}
