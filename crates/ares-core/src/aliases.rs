//! Friendly app names and the launch targets they stand for.
//!
//! The web front end resolves a spoken or typed app name through this table
//! before building the activation URL; names not in the table are passed
//! through unchanged.

const ALIASES: &[(&str, &str)] = &[
    ("calculator", "ms-calculator:"),
    ("notepad", "ms-notepad:"),
    ("paint", "ms-paint:"),
    (
        "chrome",
        "C:/Program Files/Google/Chrome/Application/chrome.exe",
    ),
    ("spotify", "spotify:"),
    ("discord", "discord:"),
    ("vscode", "vscode:"),
    ("code", "vscode:"),
    ("word", "ms-word:"),
    ("excel", "ms-excel:"),
    ("powerpoint", "ms-powerpoint:"),
    ("settings", "ms-settings:home"),
    ("wifi", "ms-settings:network-wifi"),
    ("bluetooth", "ms-settings:bluetooth"),
    ("display", "ms-settings:display"),
    ("sound", "ms-settings:sound"),
    ("battery", "ms-settings:batterysaver"),
    ("update", "ms-settings:windowsupdate"),
    ("windows", "ms-settings:windowsupdate"),
    ("network", "ms-settings:network-status"),
    ("personalization", "ms-settings:personalization"),
    ("downloads", "downloads"),
    ("documents", "documents"),
    ("pictures", "pictures"),
    ("videos", "videos"),
    ("desktop", "desktop"),
    ("music", "music"),
    ("weather_app", "bingweather:"),
    ("maps", "bingmaps:"),
    ("photos", "ms-photos:"),
    ("store", "ms-windows-store:"),
    ("terminal", "wt:"),
    ("cmd", "cmd:"),
];

/// Look up a name (case-insensitive, surrounding whitespace ignored).
pub fn lookup(name: &str) -> Option<&'static str> {
    let key = name.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, target)| *target)
}

/// Resolve a name to its launch target, falling back to the name itself.
pub fn resolve_alias(name: &str) -> String {
    lookup(name).map_or_else(|| name.to_string(), str::to_string)
}

/// All `(alias, target)` pairs in table order.
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIASES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("  Display "), Some("ms-settings:display"));
        assert_eq!(lookup("CALCULATOR"), Some("ms-calculator:"));
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(lookup("notes"), None);
        assert_eq!(resolve_alias("steam://run/570"), "steam://run/570");
    }

    #[test]
    fn test_aliases_are_unique_and_lowercase() {
        let names: Vec<&str> = aliases().map(|(name, _)| name).collect();
        for name in &names {
            assert_eq!(*name, name.to_lowercase());
            assert_eq!(names.iter().filter(|n| *n == name).count(), 1, "{name}");
        }
    }
}
