//! CLI argument definitions for ares-setup.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ares-setup")]
#[command(about = "Register the avcks:// URL scheme", version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(flatten)]
    pub install: InstallArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct InstallArgs {
    /// Handler to register (defaults to ares-link next to this executable)
    #[arg(long, value_name = "PATH", env = "ARES_HANDLER_PATH")]
    pub handler: Option<PathBuf>,

    /// Interpreter that runs the handler, placed before it in the command
    #[arg(long, value_name = "PATH", env = "ARES_INTERPRETER")]
    pub interpreter: Option<PathBuf>,

    /// Print the registration without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run registration as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register the scheme for the current user (default)
    Install(InstallArgs),
    /// Print the activation URL for an app name or launch target
    Url {
        /// App alias (e.g. "display") or raw target (e.g. "spotify:")
        target: String,
    },
    /// List the built-in app aliases
    Aliases,
}
