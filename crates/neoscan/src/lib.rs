//! Neoscan - explore close approaches of near-Earth objects.
//!
//! This crate provides both a CLI application and a library for loading NASA
//! NEO and close-approach data, filtering approaches by date, distance,
//! velocity, diameter and hazard flag, and writing the results.
//!
//! The query engine is synchronous and lazy:
//!
//! ```
//! use neoscan::database::{ApproachSource, NeoDatabase};
//! use neoscan::domain::{CloseApproach, NearEarthObject};
//! use neoscan::filters::{create_filters, Criteria};
//! use neoscan::limit::limit;
//!
//! let time = chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let db = NeoDatabase::new(
//!     vec![NearEarthObject::new("433", Some("Eros".to_string()), Some(16.84), false)],
//!     vec![CloseApproach::new("433", time, 0.25, 5.1)],
//! );
//!
//! let filters = create_filters(&Criteria {
//!     diameter_min: Some(10.0),
//!     ..Criteria::default()
//! });
//! let results: Vec<_> = limit(db.query(&filters).unwrap(), Some(5)).collect();
//! assert_eq!(results.len(), 1);
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod database;
pub mod domain;
pub mod error;
pub mod extract;
pub mod filters;
pub mod limit;
pub mod write;

// Public CLI module (needed by binary)
pub mod cli;

pub mod app;
pub mod config;
pub mod output;
