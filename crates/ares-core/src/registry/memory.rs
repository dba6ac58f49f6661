//! In-memory association store for testing
//!
//! Mirrors the registry's key/value layout in a map so registration can be
//! verified without touching the real registry.

use super::AssociationStore;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// key path -> value name ("" for the default value) -> data
    keys: BTreeMap<String, BTreeMap<String, String>>,
    /// Writes still allowed before the store starts refusing; `None` is unlimited.
    writes_left: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, as an unprivileged registry would.
    pub fn denied() -> Self {
        Self::fail_after(0)
    }

    /// A store that accepts `writes` values and refuses everything after,
    /// leaving a partly written tree behind.
    pub fn fail_after(writes: usize) -> Self {
        Self {
            keys: BTreeMap::new(),
            writes_left: Some(writes),
        }
    }

    /// Lift or impose the write restriction.
    pub fn set_denied(&mut self, denied: bool) {
        self.writes_left = if denied { Some(0) } else { None };
    }

    /// Read a value back. `None` for `name` reads the default value.
    pub fn value(&self, key_path: &str, name: Option<&str>) -> Option<&str> {
        self.keys
            .get(key_path)?
            .get(name.unwrap_or(""))
            .map(String::as_str)
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl AssociationStore for MemoryStore {
    fn set_string(&mut self, key_path: &str, name: Option<&str>, value: &str) -> Result<()> {
        match self.writes_left {
            Some(0) => {
                return Err(Error::Registration(format!(
                    "Failed to create registry key '{key_path}': Access is denied."
                )));
            }
            Some(ref mut left) => *left -= 1,
            None => {}
        }
        self.keys
            .entry(key_path.to_string())
            .or_default()
            .insert(name.unwrap_or("").to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistrationEntry;

    fn sample_entry() -> RegistrationEntry {
        RegistrationEntry::new("avcks", r#""C:\ares-link.exe" "%1""#.to_string())
    }

    #[test]
    fn test_write_association_layout() {
        let mut store = MemoryStore::new();
        store.write_association(&sample_entry()).unwrap();

        assert_eq!(
            store.value(r"Software\Classes\avcks", None),
            Some("URL:avcks Protocol")
        );
        assert_eq!(
            store.value(r"Software\Classes\avcks", Some("URL Protocol")),
            Some("")
        );
        assert_eq!(
            store.value(r"Software\Classes\avcks\shell\open\command", None),
            Some(r#""C:\ares-link.exe" "%1""#)
        );
        assert_eq!(store.key_count(), 2);
    }

    #[test]
    fn test_denied_store_writes_nothing() {
        let mut store = MemoryStore::denied();
        let err = store.write_association(&sample_entry()).unwrap_err();

        assert!(matches!(err, Error::Registration(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_fail_after_leaves_partial_tree() {
        let mut store = MemoryStore::fail_after(2);
        let err = store.write_association(&sample_entry()).unwrap_err();

        assert!(matches!(err, Error::Registration(_)));
        assert_eq!(
            store.value(r"Software\Classes\avcks", None),
            Some("URL:avcks Protocol")
        );
        assert_eq!(
            store.value(r"Software\Classes\avcks\shell\open\command", None),
            None
        );
    }

    #[test]
    fn test_rewrite_overwrites_command() {
        let mut store = MemoryStore::new();
        store.write_association(&sample_entry()).unwrap();

        let updated = RegistrationEntry::new("avcks", r#""D:\new.exe" "%1""#.to_string());
        store.write_association(&updated).unwrap();

        assert_eq!(
            store.value(r"Software\Classes\avcks\shell\open\command", None),
            Some(r#""D:\new.exe" "%1""#)
        );
        assert_eq!(store.key_count(), 2);
    }
}
