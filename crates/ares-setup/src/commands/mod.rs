//! CLI command implementations.

pub mod install;
pub mod url;
