//! Classification of decoded commands.

use crate::config::handler::LOCAL_DRIVE_PREFIX;
use strum::{Display, IntoStaticStr};

/// How a decoded command is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum TargetKind {
    /// A protocol or shell string (`spotify:`, `ms-settings:display`),
    /// handed to the shell's generic `start`.
    #[strum(serialize = "protocol")]
    Protocol,
    /// A local file or folder, opened with its associated application.
    #[strum(serialize = "local path")]
    LocalPath,
}

/// Classify a decoded command.
///
/// Anything containing a colon is a protocol unless it starts with the
/// `C:` drive prefix. The check is purely syntactic and case-sensitive, so
/// `D:\file` counts as a protocol and `c:\file` does too.
pub fn classify(command: &str) -> TargetKind {
    if command.contains(':') && !command.starts_with(LOCAL_DRIVE_PREFIX) {
        TargetKind::Protocol
    } else {
        TargetKind::LocalPath
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_with_multiple_colons() {
        assert_eq!(classify("spotify:track:123"), TargetKind::Protocol);
    }

    #[test]
    fn test_windows_path_with_backslashes() {
        assert_eq!(classify(r"C:\Users\me\file.txt"), TargetKind::LocalPath);
    }

    #[test]
    fn test_windows_path_with_forward_slashes() {
        assert_eq!(classify("C:/apps/run"), TargetKind::LocalPath);
    }

    #[test]
    fn test_bare_word_is_local_path() {
        assert_eq!(classify("downloads"), TargetKind::LocalPath);
        assert_eq!(classify(""), TargetKind::LocalPath);
    }

    #[test]
    fn test_other_drive_letters_are_protocols() {
        assert_eq!(classify(r"D:\games\run.exe"), TargetKind::Protocol);
        assert_eq!(classify(r"c:\lower\case"), TargetKind::Protocol);
    }

    #[test]
    fn test_trailing_colon_protocol() {
        assert_eq!(classify("ms-calculator:"), TargetKind::Protocol);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TargetKind::Protocol.to_string(), "protocol");
        let name: &'static str = TargetKind::LocalPath.into();
        assert_eq!(name, "local path");
    }
}
