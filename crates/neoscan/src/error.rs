//! Error types for neoscan operations.

use crate::filters::FilterError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for neoscan operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Reading or writing a data file failed.
    #[error("Data file error: {0}")]
    Data(#[from] neoscan_io::Error),

    /// A data file is readable but does not have the expected layout.
    #[error("Invalid data in {path}: {reason}")]
    InvalidData {
        /// File that was being loaded
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A filter could not be evaluated.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The output path has an extension with no matching writer.
    #[error("Unsupported output format for {0} (expected .csv, .json or .jsonl)")]
    UnsupportedOutputFormat(PathBuf),
}

/// A specialized Result type for neoscan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{Attribute, AttributeFilter, Comparator};

    #[test]
    fn test_filter_error_converts_transparently() {
        let filter = AttributeFilter::new(Attribute::Velocity, Comparator::Ge, true);
        let error: Error = filter.validate().unwrap_err().into();

        assert!(matches!(error, Error::Filter(_)));
        assert_eq!(
            error.to_string(),
            "unsupported criterion: velocity cannot be compared with flag value true"
        );
    }

    #[test]
    fn test_unsupported_output_format_message() {
        let error = Error::UnsupportedOutputFormat(PathBuf::from("out.txt"));
        assert_eq!(
            error.to_string(),
            "Unsupported output format for out.txt (expected .csv, .json or .jsonl)"
        );
    }
}
