//! CLI argument definitions for ares-link.

use ares_core::config::handler::ERROR_LOG_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ares-link")]
#[command(about = "avcks:// URL handler", version)]
pub struct Args {
    /// Activation URL passed by the OS (e.g. avcks://ms-settings%3Adisplay)
    pub url: Option<String>,

    /// Anything after the URL is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Append-only log for failed launches
    #[arg(long, env = "ARES_ERROR_LOG", default_value = ERROR_LOG_FILE)]
    pub error_log: PathBuf,
}
