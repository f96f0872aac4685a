//! Error types for neoscan-io operations.

use std::io;
use thiserror::Error;

/// The error type for neoscan-io operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing or serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data does not have the expected shape.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for neoscan-io operations.
pub type Result<T> = std::result::Result<T, Error>;
