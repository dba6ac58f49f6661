use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to register URL scheme: {0}")]
    Registration(String),

    #[error("Failed to launch '{command}': {message}")]
    Launch { command: String, message: String },

    #[error("{0} is only supported on Windows")]
    UnsupportedPlatform(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a launch failure from any displayable cause.
    pub fn launch(command: &str, cause: impl std::fmt::Display) -> Self {
        Error::Launch {
            command: command.to_string(),
            message: cause.to_string(),
        }
    }
}
