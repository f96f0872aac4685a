//! Tabular I/O for neoscan.
//!
//! This library provides resilient reading of CSV and JSON data sources and
//! crash-safe writing of CSV, JSON and JSONL output files.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod warning;
pub mod writer;

pub use atomic::{write_atomic, write_jsonl_atomic_iter};
pub use error::{Error, Result};
pub use reader::{read_csv_resilient, read_json_document, read_to_string};
pub use warning::{Warning, WarningCollector};
pub use writer::JsonlWriter;
