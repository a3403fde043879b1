//! Error types for evcodegen

use std::path::PathBuf;
use thiserror::Error;

/// evcodegen error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown macro family: {0}")]
    UnknownFamily(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for evcodegen
pub type Result<T> = std::result::Result<T, Error>;
