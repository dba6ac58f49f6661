//! Installer: registers the scheme for the current user.

use crate::config::handler::BINARY_NAME;
use crate::error::{Error, Result};
use crate::registry::{AssociationStore, RegistrationEntry};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the handler lives and what runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    /// Absolute path to the handler entry point.
    pub handler: PathBuf,
    /// Optional interpreter placed in front of the handler in the command.
    pub interpreter: Option<PathBuf>,
}

impl Installation {
    pub fn new(handler: PathBuf, interpreter: Option<PathBuf>) -> Self {
        Self {
            handler,
            interpreter,
        }
    }

    /// Resolve the installation from optional overrides.
    ///
    /// Explicit paths are made absolute against the current directory.
    /// Without a handler path, `ares-link` next to the running executable
    /// is used.
    pub fn locate(handler: Option<&Path>, interpreter: Option<&Path>) -> Result<Self> {
        let handler = match handler {
            Some(path) => std::path::absolute(path)?,
            None => {
                let exe = std::env::current_exe()?;
                handler_beside(&exe)
            }
        };
        if !handler.exists() {
            warn!("Handler not found at {}", handler.display());
        }

        let interpreter = interpreter.map(std::path::absolute).transpose()?;
        Ok(Self::new(handler, interpreter))
    }

    pub fn entry(&self) -> RegistrationEntry {
        RegistrationEntry::for_handler(self.interpreter.as_deref(), &self.handler)
    }
}

/// Path of the handler binary in the same directory as `exe`.
pub fn handler_beside(exe: &Path) -> PathBuf {
    let file_name = format!("{}{}", BINARY_NAME, std::env::consts::EXE_SUFFIX);
    match exe.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write the scheme association. Every failure is a registration failure.
pub fn install<S: AssociationStore>(
    store: &mut S,
    installation: &Installation,
) -> Result<RegistrationEntry> {
    let entry = installation.entry();
    info!("Registering {}:// -> {}", entry.scheme, entry.command);

    store.write_association(&entry).map_err(|e| match e {
        Error::Registration(_) => e,
        other => Error::Registration(other.to_string()),
    })?;
    Ok(entry)
}
