//! Append-only log of failed launches.
//!
//! The handler runs without a console, so this file is the only place a
//! launch failure ever shows up.

use crate::config::handler::ERROR_LOG_FILE;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(ERROR_LOG_FILE)
    }
}

impl ErrorLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one failure line. The file is created on first use and closed
    /// again before returning.
    pub fn append(&self, command: &str, message: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_entry(command, message))?;
        Ok(())
    }
}

/// Format a single log line (without the trailing newline).
pub fn format_entry(command: &str, message: &str) -> String {
    format!("Error launching '{}': {}", command, message)
}
