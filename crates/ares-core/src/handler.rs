//! Link handler: turns one activation URL into one launch.

use crate::dispatch::{TargetKind, classify};
use crate::error::{Error, Result};
use crate::error_log::ErrorLog;
use crate::launcher::Launcher;
use crate::scheme::decode_activation;
use tracing::{debug, error, info};

/// Outcome of handling one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The launch request was issued.
    Launched { command: String, kind: TargetKind },
    /// The launch failed and was written to the error log.
    Failed { command: String, message: String },
}

pub struct LinkHandler<L: Launcher> {
    launcher: L,
    error_log: ErrorLog,
}

impl<L: Launcher> LinkHandler<L> {
    pub fn new(launcher: L, error_log: ErrorLog) -> Self {
        Self {
            launcher,
            error_log,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Decode `url`, classify it and launch it.
    ///
    /// Never fails: launch errors go to the error log, and a log that cannot
    /// be written is only reported through tracing.
    pub fn handle(&self, url: &str) -> Dispatch {
        let command = decode_activation(url);
        info!("Command Received: {}", command);

        let kind = classify(&command);
        debug!("Classified as {}", kind);

        match self.launch(&command, kind) {
            Ok(()) => Dispatch::Launched { command, kind },
            Err(e) => {
                let message = launch_message(&e);
                error!("Launch failed: {}", message);
                if let Err(log_err) = self.error_log.append(&command, &message) {
                    error!(
                        "Failed to write error log {}: {}",
                        self.error_log.path().display(),
                        log_err
                    );
                }
                Dispatch::Failed { command, message }
            }
        }
    }

    fn launch(&self, command: &str, kind: TargetKind) -> Result<()> {
        match kind {
            TargetKind::Protocol => self.launcher.shell_open(command),
            TargetKind::LocalPath => self.launcher.open_path(command),
        }
    }
}

/// The underlying cause, without the command the log line already carries.
fn launch_message(err: &Error) -> String {
    match err {
        Error::Launch { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
