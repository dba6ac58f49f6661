mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ares_setup=warn,ares_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Some(Command::Install(install)) => commands::install::run(&install),
        Some(Command::Url { target }) => commands::url::run(&target),
        Some(Command::Aliases) => commands::url::list_aliases(),
        None => commands::install::run(&args.install),
    }
}
