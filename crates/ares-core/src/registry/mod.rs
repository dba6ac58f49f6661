//! Per-user URL scheme association store.
//!
//! The OS reads these entries when a scheme URL is activated; this crate only
//! ever writes them. [`AssociationStore`] is the seam: [`RegistryStore`] talks
//! to the Windows registry, [`MemoryStore`] stands in for it in tests.

mod entry;
pub mod memory;
mod store;

pub use entry::{RegistrationEntry, build_command};
pub use store::RegistryStore;

// In-memory store for tests (always available for unit and integration tests)
#[doc(hidden)]
pub use memory::MemoryStore;

use crate::config::registry::{OPEN_COMMAND_SUBKEY, URL_PROTOCOL_VALUE};
use crate::error::Result;
use tracing::debug;

/// Writable store of string values addressed by key path and value name.
///
/// Key paths are relative to the current user's root and use `\` as the
/// separator. A `None` name addresses the key's default value.
pub trait AssociationStore {
    /// Create the key if needed and set a string value on it.
    fn set_string(&mut self, key_path: &str, name: Option<&str>, value: &str) -> Result<()>;

    /// Write the full association for `entry`:
    ///
    /// - `<scheme key>` default value = description
    /// - `<scheme key>\URL Protocol` = empty string
    /// - `<scheme key>\shell\open\command` default value = command
    ///
    /// Every value is overwritten, so running this again after a failure
    /// leaves a consistent tree.
    fn write_association(&mut self, entry: &RegistrationEntry) -> Result<()> {
        let root = entry.key_path();
        debug!("Writing association under {}", root);

        self.set_string(&root, None, &entry.description)?;
        self.set_string(&root, Some(URL_PROTOCOL_VALUE), "")?;

        let command_key = format!(r"{}\{}", root, OPEN_COMMAND_SUBKEY);
        self.set_string(&command_key, None, &entry.command)?;
        Ok(())
    }
}

impl<S: AssociationStore + ?Sized> AssociationStore for &mut S {
    fn set_string(&mut self, key_path: &str, name: Option<&str>, value: &str) -> Result<()> {
        (**self).set_string(key_path, name, value)
    }
}
