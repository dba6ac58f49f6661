use super::AssociationStore;
use crate::error::Result;

/// Association store backed by the current user's registry hive (HKCU).
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStore;

impl RegistryStore {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "windows")]
mod win {
    use crate::error::{Error, Result};
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use ::windows::Win32::System::Registry::{
        HKEY, HKEY_CURRENT_USER, KEY_WRITE, REG_OPTION_NON_VOLATILE, REG_SZ, RegCloseKey,
        RegCreateKeyExW, RegSetValueExW,
    };
    use ::windows::core::{HSTRING, PCWSTR};

    /// Open registry key, closed on drop.
    pub(super) struct OwnedKey(HKEY);

    impl OwnedKey {
        /// Create or open `subkey` under HKCU with write access.
        pub(super) fn create(subkey: &str) -> Result<Self> {
            let hkey_subkey = HSTRING::from(subkey);
            let mut key = HKEY::default();
            // SAFETY: RegCreateKeyExW creates or opens a registry key and writes the
            // handle into `key`, which outlives the call.
            unsafe {
                RegCreateKeyExW(
                    HKEY_CURRENT_USER,
                    &hkey_subkey,
                    0,
                    None,
                    REG_OPTION_NON_VOLATILE,
                    KEY_WRITE,
                    None,
                    &mut key,
                    None,
                )
                .ok()
                .map_err(|e| {
                    Error::Registration(format!("Failed to create registry key '{subkey}': {e}"))
                })?;
            }
            Ok(Self(key))
        }

        pub(super) fn set_string(&self, name: Option<&str>, value: &str) -> Result<()> {
            let wide = to_wide(value);
            // The default value is addressed with a null name.
            let name_wide: Vec<u16>;
            let pcwstr_name = if let Some(n) = name {
                name_wide = to_wide(n);
                PCWSTR::from_raw(name_wide.as_ptr())
            } else {
                PCWSTR::null()
            };
            // SAFETY: RegSetValueExW writes a REG_SZ value. The PCWSTR pointers remain valid
            // for the duration of the call because `name_wide` and `wide` are alive.
            unsafe {
                RegSetValueExW(
                    self.0,
                    pcwstr_name,
                    0,
                    REG_SZ,
                    Some(std::slice::from_raw_parts(
                        wide.as_ptr().cast::<u8>(),
                        wide.len() * 2,
                    )),
                )
                .ok()
                .map_err(|e| {
                    Error::Registration(format!(
                        "Failed to set registry value '{}': {e}",
                        name.unwrap_or("(default)")
                    ))
                })?;
            }
            Ok(())
        }
    }

    impl Drop for OwnedKey {
        fn drop(&mut self) {
            // SAFETY: the handle was opened by RegCreateKeyExW and is closed exactly once.
            unsafe {
                let _ = RegCloseKey(self.0);
            }
        }
    }

    /// Null-terminated UTF-16 copy of `s`.
    fn to_wide(s: &str) -> Vec<u16> {
        OsStr::new(s)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect()
    }
}

#[cfg(target_os = "windows")]
impl AssociationStore for RegistryStore {
    fn set_string(&mut self, key_path: &str, name: Option<&str>, value: &str) -> Result<()> {
        let key = win::OwnedKey::create(key_path)?;
        key.set_string(name, value)
    }
}

#[cfg(not(target_os = "windows"))]
impl AssociationStore for RegistryStore {
    fn set_string(&mut self, _key_path: &str, _name: Option<&str>, _value: &str) -> Result<()> {
        Err(crate::error::Error::UnsupportedPlatform("URL scheme registration"))
    }
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;
    use crate::registry::RegistrationEntry;
    use std::path::Path;

    #[test]
    fn test_registration_unsupported_off_windows() {
        let entry = RegistrationEntry::for_handler(None, Path::new("/opt/ares-link"));
        let err = RegistryStore::new().write_association(&entry).unwrap_err();
        assert!(err.to_string().contains("only supported on Windows"));
    }
}
