//! Install command — register the avcks:// scheme for the current user.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use ares_core::{Installation, RegistrationEntry, RegistryStore, install};
use owo_colors::OwoColorize;
use tracing::error;

use crate::cli::InstallArgs;

const RULE: &str = "========================================";

pub fn run(args: &InstallArgs) -> Result<()> {
    let outcome = Installation::locate(args.handler.as_deref(), args.interpreter.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|installation| {
            if args.dry_run {
                print_preview(&installation.entry(), args.json)?;
                return Ok(());
            }
            let entry = install(&mut RegistryStore::new(), &installation)?;
            println!("{}", success_banner(&entry, &installation));
            Ok(())
        });

    // Registration problems end here; they are reported, not propagated.
    if let Err(e) = outcome {
        error!("Setup failed: {:#}", e);
        println!("{}", failure_message(&e));
    }

    if !args.no_pause {
        wait_for_enter()?;
    }
    Ok(())
}

fn print_preview(entry: &RegistrationEntry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        println!("Key:         HKCU\\{}", entry.key_path());
        println!("Description: {}", entry.description);
        println!("Command:     {}", entry.command);
    }
    Ok(())
}

fn success_banner(entry: &RegistrationEntry, installation: &Installation) -> String {
    format!(
        "\n{RULE}\n{}\n{RULE}\n\nProtocol '{}://' is now registered.\nHandler: {}\n\n\
         You can now launch apps from AVCKS without any background server!\n{RULE}\n",
        "ARES DEEP LINK SETUP SUCCESSFUL".green().bold(),
        entry.scheme,
        installation.handler.display(),
    )
}

fn failure_message(err: &anyhow::Error) -> String {
    format!(
        "\n{} {}\nPlease try running this terminal as Administrator.",
        "SETUP FAILED:".red().bold(),
        err
    )
}

fn wait_for_enter() -> Result<()> {
    print!("Press Enter to finish...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_banner_names_scheme_and_handler() {
        let installation = Installation::new(PathBuf::from(r"C:\ares\ares-link.exe"), None);
        let banner = success_banner(&installation.entry(), &installation);

        assert!(banner.contains("Protocol 'avcks://' is now registered."));
        assert!(banner.contains(r"Handler: C:\ares\ares-link.exe"));
    }

    #[test]
    fn test_failure_message_suggests_elevation() {
        let err = anyhow::Error::from(ares_core::Error::Registration(
            "Access is denied.".to_string(),
        ));
        let message = failure_message(&err);

        assert!(message.contains("Access is denied."));
        assert!(message.contains("Administrator"));
    }
}
