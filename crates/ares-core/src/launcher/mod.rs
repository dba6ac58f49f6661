//! Launch primitives used by the link handler.
//!
//! The [`Launcher`] trait keeps the OS calls behind a seam so the handler can
//! be driven by [`RecordingLauncher`] in tests.

pub mod mock;
mod system;

pub use system::SystemLauncher;

// Recording launcher for tests (always available for unit and integration tests)
#[doc(hidden)]
pub use mock::{LaunchCall, RecordingLauncher};

use crate::error::Result;

/// Fire-and-forget launch operations.
///
/// Both methods return as soon as the launch request has been issued; they
/// never wait for the launched program.
pub trait Launcher {
    /// Hand a protocol or shell string to the shell's generic `start`.
    fn shell_open(&self, command: &str) -> Result<()>;

    /// Open a local file or folder with its associated application.
    fn open_path(&self, path: &str) -> Result<()>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn shell_open(&self, command: &str) -> Result<()> {
        (**self).shell_open(command)
    }

    fn open_path(&self, path: &str) -> Result<()> {
        (**self).open_path(path)
    }
}
