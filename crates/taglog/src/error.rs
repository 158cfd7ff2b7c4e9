//! Error types for the logger.

use std::io;

use taglog_format::FormatError;
use thiserror::Error;

/// Errors returned by logging calls and configuration loading.
#[derive(Debug, Error)]
pub enum LogError {
    /// The template or argument list was rejected; nothing was written.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Writing to the destination or the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded.
    #[error("config error: {message}")]
    Config { message: String },

    /// Configuration YAML did not match the expected shape.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, LogError>;
