use crate::config::registry::{CLASSES_ROOT, URL_PLACEHOLDER};
use crate::config::scheme;
use serde::Serialize;
use std::path::Path;

/// One URL scheme registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationEntry {
    pub scheme: String,
    pub description: String,
    /// Launch command with a `%1` placeholder for the activated URL.
    pub command: String,
}

impl RegistrationEntry {
    pub fn new(scheme: &str, command: String) -> Self {
        Self {
            scheme: scheme.to_string(),
            description: format!("URL:{} Protocol", scheme),
            command,
        }
    }

    /// Registration of the `avcks` scheme for the given handler.
    pub fn for_handler(interpreter: Option<&Path>, handler: &Path) -> Self {
        Self::new(scheme::NAME, build_command(interpreter, handler))
    }

    /// Key path of the scheme under the current user's root.
    pub fn key_path(&self) -> String {
        format!(r"{}\{}", CLASSES_ROOT, self.scheme)
    }
}

/// Build the open command: `"<interpreter>" "<handler>" "%1"`, or
/// `"<handler>" "%1"` when the handler runs on its own.
pub fn build_command(interpreter: Option<&Path>, handler: &Path) -> String {
    let handler_part = format!("\"{}\" \"{}\"", handler.display(), URL_PLACEHOLDER);
    match interpreter {
        Some(interpreter) => format!("\"{}\" {}", interpreter.display(), handler_part),
        None => handler_part,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_command_without_interpreter() {
        let handler = PathBuf::from(r"C:\Tools\ares-link.exe");
        assert_eq!(
            build_command(None, &handler),
            r#""C:\Tools\ares-link.exe" "%1""#
        );
    }

    #[test]
    fn test_command_with_interpreter() {
        let handler = PathBuf::from(r"C:\Tools\ares_link.py");
        let python = PathBuf::from(r"C:\Python312\python.exe");
        assert_eq!(
            build_command(Some(&python), &handler),
            r#""C:\Python312\python.exe" "C:\Tools\ares_link.py" "%1""#
        );
    }

    #[test]
    fn test_entry_fields() {
        let entry = RegistrationEntry::for_handler(None, Path::new("/opt/ares-link"));
        assert_eq!(entry.scheme, "avcks");
        assert_eq!(entry.description, "URL:avcks Protocol");
        assert_eq!(entry.key_path(), r"Software\Classes\avcks");
        assert!(entry.command.ends_with(r#""%1""#));
    }

    #[test]
    fn test_entry_serializes_to_json() {
        let entry = RegistrationEntry::new("avcks", "cmd".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["scheme"], "avcks");
        assert_eq!(json["description"], "URL:avcks Protocol");
        assert_eq!(json["command"], "cmd");
    }
}
