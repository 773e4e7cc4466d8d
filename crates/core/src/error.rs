use std::io;

/// Errors that can occur during testgate operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for testgate operations
pub type Result<T> = std::result::Result<T, Error>;
