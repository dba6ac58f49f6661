//! Fixed configuration values.
//!
//! The scheme name, the registry layout it is written under, and the
//! handler's file locations are constants; nothing here is read at runtime.

/// URL scheme handled by `ares-link`.
pub mod scheme {
    /// Scheme name as registered with the OS.
    pub const NAME: &str = "avcks";

    /// Literal prefix stripped from activation URLs.
    pub const PREFIX: &str = "avcks://";
}

/// Per-user association store layout.
pub mod registry {
    /// Parent key for per-user class registrations (under HKCU).
    pub const CLASSES_ROOT: &str = r"Software\Classes";

    /// Marker value that flags a class key as a URL protocol.
    pub const URL_PROTOCOL_VALUE: &str = "URL Protocol";

    /// Subkey holding the open command, relative to the scheme key.
    pub const OPEN_COMMAND_SUBKEY: &str = r"shell\open\command";

    /// Placeholder the OS substitutes with the activated URL.
    pub const URL_PLACEHOLDER: &str = "%1";
}

/// Link handler settings.
pub mod handler {
    /// Executable name of the link handler, without extension.
    pub const BINARY_NAME: &str = "ares-link";

    /// Append-only error log, relative to the working directory.
    pub const ERROR_LOG_FILE: &str = "ares_error.log";

    /// Commands starting with this prefix are always treated as local paths.
    pub const LOCAL_DRIVE_PREFIX: &str = "C:";
}
