pub mod aliases;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod error_log;
pub mod handler;
pub mod installer;
pub mod launcher;
pub mod registry;
pub mod scheme;

pub use aliases::resolve_alias;
pub use dispatch::{TargetKind, classify};
pub use error::{Error, Result};
pub use error_log::ErrorLog;
pub use handler::{Dispatch, LinkHandler};
pub use installer::{Installation, install};
pub use launcher::{Launcher, SystemLauncher};
pub use registry::{AssociationStore, RegistrationEntry, RegistryStore};
pub use scheme::{decode_activation, decode_payload, encode_activation, strip_scheme};
