//! Writing query results to CSV, JSON or JSONL files.
//!
//! The format is picked from the output file extension. Every writer pulls
//! from its input one approach at a time and replaces the target file
//! atomically, so an interrupted run never leaves a truncated result file.

use crate::domain::CloseApproach;
use crate::error::{Error, Result};
use serde::{Serialize, Serializer as _};
use std::path::Path;

/// Column order of CSV output.
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A single pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Pick the format from a file extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOutputFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some("jsonl") => Ok(Self::Jsonl),
            _ => Err(Error::UnsupportedOutputFormat(path.to_path_buf())),
        }
    }
}

/// NEO part of a serialized result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord<'a> {
    /// Primary designation
    pub designation: &'a str,
    /// IAU name, empty when unknown
    pub name: &'a str,
    /// Diameter in km, `null` when unknown
    pub diameter_km: Option<f64>,
    /// Hazard flag; `false` when the NEO is not linked
    pub potentially_hazardous: bool,
}

/// A close approach as written to JSON and JSONL output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRecord<'a> {
    /// Approach time, `YYYY-MM-DD HH:MM`
    pub datetime_utc: String,
    /// Nominal approach distance in au
    pub distance_au: f64,
    /// Relative velocity in km/s
    pub velocity_km_s: f64,
    /// The approaching NEO
    pub neo: NeoRecord<'a>,
}

impl<'a> From<&'a CloseApproach> for ApproachRecord<'a> {
    fn from(approach: &'a CloseApproach) -> Self {
        let neo = match approach.neo.as_deref() {
            Some(neo) => NeoRecord {
                designation: neo.designation.as_str(),
                name: neo.name.as_deref().unwrap_or_default(),
                diameter_km: neo.diameter,
                potentially_hazardous: neo.hazardous,
            },
            None => NeoRecord {
                designation: approach.designation.as_str(),
                name: "",
                diameter_km: None,
                potentially_hazardous: false,
            },
        };
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo,
        }
    }
}

impl ApproachRecord<'_> {
    /// Flat CSV row in [`CSV_FIELDS`] order.
    fn csv_row(&self) -> [String; 7] {
        let diameter = self
            .neo
            .diameter_km
            .map_or_else(|| "nan".to_string(), csv_float);
        let hazardous = if self.neo.potentially_hazardous {
            "True"
        } else {
            "False"
        };
        [
            self.datetime_utc.clone(),
            csv_float(self.distance_au),
            csv_float(self.velocity_km_s),
            self.neo.designation.to_string(),
            self.neo.name.to_string(),
            diameter,
            hazardous.to_string(),
        ]
    }
}

/// Shortest round-trip text for a CSV number. Whole values keep a `.0` so
/// the column reads as a float, e.g. `12.0` rather than `12`.
fn csv_float(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Write results to `path` in the format its extension names.
///
/// Returns the number of approaches written.
///
/// # Errors
///
/// Fails on an unsupported extension before anything is written, and on any
/// I/O or serialization error.
pub async fn write_results<'a, I>(path: &Path, results: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let format = OutputFormat::from_path(path)?;
    let written = match format {
        OutputFormat::Csv => write_to_csv(path, results).await?,
        OutputFormat::Json => write_to_json(path, results).await?,
        OutputFormat::Jsonl => write_to_jsonl(path, results).await?,
    };
    tracing::info!(path = %path.display(), format = ?format, records = written, "Wrote results");
    Ok(written)
}

/// Write results as CSV with a header row.
///
/// An unknown name is written as an empty field, an unknown diameter as
/// `nan`, and the hazard flag as `True` or `False`.
///
/// # Errors
///
/// Fails on any I/O or CSV error.
pub async fn write_to_csv<'a, I>(path: &Path, results: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_FIELDS)
        .map_err(neoscan_io::Error::from)?;

    let mut written = 0;
    for approach in results {
        writer
            .write_record(ApproachRecord::from(approach).csv_row())
            .map_err(neoscan_io::Error::from)?;
        written += 1;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    neoscan_io::write_atomic(path, &buffer).await?;
    Ok(written)
}

/// Write results as one JSON array, indented with tabs.
///
/// # Errors
///
/// Fails on any I/O or serialization error.
pub async fn write_to_json<'a, I>(path: &Path, results: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let mut written = 0;
    let records = results.into_iter().map(|approach| {
        written += 1;
        ApproachRecord::from(approach)
    });

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    serializer
        .collect_seq(records)
        .map_err(neoscan_io::Error::from)?;
    buffer.push(b'\n');

    neoscan_io::write_atomic(path, &buffer).await?;
    Ok(written)
}

/// Write results as JSON Lines, one approach per line.
///
/// # Errors
///
/// Fails on any I/O or serialization error.
pub async fn write_to_jsonl<'a, I>(path: &Path, results: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let records = results.into_iter().map(ApproachRecord::from);
    Ok(neoscan_io::write_jsonl_atomic_iter(path, records).await?)
}
