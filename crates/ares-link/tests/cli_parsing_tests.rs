//! CLI argument parsing tests.
//!
//! These tests verify that the handler's arguments are parsed correctly
//! without launching anything.

use clap::Parser;
use std::path::PathBuf;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "ares-link")]
struct Args {
    url: Option<String>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    #[arg(long, default_value = "ares_error.log")]
    error_log: PathBuf,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["ares-link"]).unwrap();
    assert!(args.url.is_none());
    assert!(args.rest.is_empty());
    assert_eq!(args.error_log, PathBuf::from("ares_error.log"));
}

#[test]
fn test_parse_activation_url() {
    let args = Args::try_parse_from(["ares-link", "avcks://ms-settings%3Adisplay"]).unwrap();
    assert_eq!(args.url.as_deref(), Some("avcks://ms-settings%3Adisplay"));
}

#[test]
fn test_extra_arguments_are_collected() {
    let args = Args::try_parse_from(["ares-link", "avcks://spotify%3A", "extra", "more"]).unwrap();
    assert_eq!(args.url.as_deref(), Some("avcks://spotify%3A"));
    assert_eq!(args.rest, vec!["extra", "more"]);
}

#[test]
fn test_custom_error_log() {
    let args = Args::try_parse_from([
        "ares-link",
        "--error-log",
        "C:/logs/ares.log",
        "avcks://calc",
    ])
    .unwrap();
    assert_eq!(args.error_log, PathBuf::from("C:/logs/ares.log"));
    assert_eq!(args.url.as_deref(), Some("avcks://calc"));
}
