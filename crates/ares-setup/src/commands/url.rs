//! Activation URL helpers.

use anyhow::Result;
use ares_core::{aliases, encode_activation, resolve_alias};

pub fn run(target: &str) -> Result<()> {
    println!("{}", activation_url(target));
    Ok(())
}

pub fn list_aliases() -> Result<()> {
    for (name, target) in aliases::aliases() {
        println!("{:<16} {}", name, target);
    }
    Ok(())
}

/// Resolve `target` through the alias table and encode it as an avcks:// URL.
fn activation_url(target: &str) -> String {
    encode_activation(&resolve_alias(target))
}
