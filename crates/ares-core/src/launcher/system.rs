use super::Launcher;
use crate::error::{Error, Result};
use tracing::debug;

/// Launcher backed by the real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    /// Runs `cmd /C start <command>` with the command passed through verbatim.
    #[cfg(target_os = "windows")]
    fn shell_open(&self, command: &str) -> Result<()> {
        use std::os::windows::process::CommandExt;

        debug!("cmd /C start {}", command);
        let child = std::process::Command::new("cmd")
            .arg("/C")
            .raw_arg(format!("start {}", command))
            .spawn()
            .map_err(|e| Error::launch(command, e))?;
        debug!("Spawned shell (PID: {})", child.id());
        Ok(())
    }

    #[cfg(not(target_os = "windows"))]
    fn shell_open(&self, command: &str) -> Result<()> {
        debug!("Opening {} with the desktop opener", command);
        open::that_detached(command).map_err(|e| Error::launch(command, e))
    }

    /// On Windows this goes through `ShellExecuteExW`, so a missing target is
    /// an error. Desktop openers elsewhere only report whether they started.
    fn open_path(&self, path: &str) -> Result<()> {
        debug!("Opening path {}", path);
        open::that_detached(path).map_err(|e| Error::launch(path, e))
    }
}
