mod cli;

use anyhow::Result;
use ares_core::{ErrorLog, LinkHandler, SystemLauncher};
use clap::Parser;
use clap::error::ErrorKind;
use cli::Args;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // The OS starts us without a console; keep logging quiet unless RUST_LOG asks.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ares_link=warn,ares_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Nobody is listening for an exit status; just leave.
            warn!("Ignoring invocation: {}", e);
            return Ok(());
        }
    };

    let Some(url) = args.url else {
        debug!("No activation URL given");
        return Ok(());
    };
    if !args.rest.is_empty() {
        debug!("Ignoring extra arguments: {:?}", args.rest);
    }

    let handler = LinkHandler::new(SystemLauncher::new(), ErrorLog::new(&args.error_log));
    handler.handle(&url);
    Ok(())
}
