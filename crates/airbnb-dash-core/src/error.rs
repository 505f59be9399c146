//! Error types for airbnb-dash-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read listings from {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid listing at line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Failed to serialize charts: {0}")]
    Serialize(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, Error>;
