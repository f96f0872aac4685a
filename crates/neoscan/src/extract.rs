//! Loading NEOs and close approaches from NASA data files.
//!
//! - NEOs come from the JPL small-body database CSV export. Columns are
//!   matched by header, so the export may carry any number of extra columns.
//! - Close approaches come from the CNEOS close-approach API JSON document,
//!   where column positions are given by its `fields` array.
//!
//! Rows that cannot be used are skipped with a [`Warning`]; only a file that
//! cannot be read, or that lacks required columns, fails the load.

use crate::domain::{cd_to_datetime, CloseApproach, Designation, NearEarthObject};
use crate::error::{Error, Result};
use neoscan_io::{read_csv_resilient, Warning, WarningCollector};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Records decoded from a data file, with the problems met along the way.
#[derive(Debug)]
pub struct Loaded<T> {
    /// Usable records, in file order
    pub records: Vec<T>,
    /// Rows that were skipped
    pub warnings: WarningCollector,
}

/// One row of the NEO CSV file. Unused columns are ignored.
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    pha: String,
    #[serde(default)]
    diameter: String,
}

impl NeoRow {
    fn into_neo(self) -> NearEarthObject {
        let name = Some(self.name.trim().to_string());
        // Empty or non-numeric diameters are unknown.
        let diameter = self.diameter.trim().parse::<f64>().ok();
        let hazardous = self.pha.trim() == "Y";
        NearEarthObject::new(self.pdes.trim(), name, diameter, hazardous)
    }
}

/// Decode NEOs from CSV text.
///
/// # Errors
///
/// Fails if the content has no header row or no `pdes` column.
pub fn parse_neos(content: &str) -> Result<Loaded<NearEarthObject>> {
    let (rows, mut warnings) = read_csv_resilient::<NeoRow>(content, &["pdes"])?;

    let mut seen = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());
    for (line_number, row) in rows {
        if row.pdes.trim().is_empty() {
            warnings.add(Warning::SkippedRow {
                line_number,
                reason: "empty designation".to_string(),
            });
            continue;
        }
        let neo = row.into_neo();
        if !seen.insert(neo.designation.clone()) {
            warnings.add(Warning::SkippedRow {
                line_number,
                reason: format!("duplicate designation '{}'", neo.designation),
            });
            continue;
        }
        records.push(neo);
    }

    Ok(Loaded { records, warnings })
}

/// Load NEOs from a CSV file.
///
/// # Errors
///
/// Fails if the file cannot be read or lacks a `pdes` column.
pub async fn load_neos(path: impl AsRef<Path>) -> Result<Loaded<NearEarthObject>> {
    let path = path.as_ref();
    let content = neoscan_io::read_to_string(path).await?;
    let loaded = parse_neos(&content).map_err(|e| with_path(e, path))?;
    tracing::info!(
        path = %path.display(),
        neos = loaded.records.len(),
        warnings = loaded.warnings.len(),
        "Loaded NEOs"
    );
    Ok(loaded)
}

/// The CNEOS close-approach document.
#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
}

/// Positions of the columns we read within each `data` row.
#[derive(Debug, Clone, Copy)]
struct CadColumns {
    des: usize,
    cd: usize,
    dist: usize,
    v_rel: usize,
}

impl CadColumns {
    fn locate(fields: &[String]) -> std::result::Result<Self, String> {
        let find = |name: &str| {
            fields
                .iter()
                .position(|field| field == name)
                .ok_or_else(|| format!("missing field '{}'", name))
        };
        Ok(Self {
            des: find("des")?,
            cd: find("cd")?,
            dist: find("dist")?,
            v_rel: find("v_rel")?,
        })
    }

    fn width(self) -> usize {
        self.des.max(self.cd).max(self.dist).max(self.v_rel) + 1
    }
}

/// CNEOS encodes every value as a JSON string; plain numbers are accepted too.
fn cell_str(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.trim().to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn cell_f64(row: &[serde_json::Value], index: usize, field: &str) -> std::result::Result<f64, String> {
    cell_str(&row[index])
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|x| x.is_finite())
        .ok_or_else(|| format!("invalid '{}' value {}", field, row[index]))
}

fn parse_cad_row(
    row: &[serde_json::Value],
    columns: CadColumns,
) -> std::result::Result<CloseApproach, String> {
    if row.len() < columns.width() {
        return Err(format!(
            "expected at least {} columns, found {}",
            columns.width(),
            row.len()
        ));
    }

    let designation = cell_str(&row[columns.des])
        .filter(|des| !des.is_empty())
        .ok_or_else(|| "missing designation".to_string())?;
    let cd = cell_str(&row[columns.cd]).ok_or_else(|| "missing approach time".to_string())?;
    let time = cd_to_datetime(&cd).map_err(|e| format!("invalid approach time '{}': {}", cd, e))?;
    let distance = cell_f64(row, columns.dist, "dist")?;
    let velocity = cell_f64(row, columns.v_rel, "v_rel")?;

    Ok(CloseApproach::new(
        Designation::from(designation),
        time,
        distance,
        velocity,
    ))
}

/// Decode close approaches from CNEOS JSON text.
///
/// # Errors
///
/// Fails if the text is not a CNEOS document or its `fields` array lacks
/// `des`, `cd`, `dist` or `v_rel`.
pub fn parse_approaches(content: &str) -> Result<Loaded<CloseApproach>> {
    let document: CadDocument = serde_json::from_str(content).map_err(neoscan_io::Error::from)?;
    approaches_from_document(&document)
}

fn approaches_from_document(document: &CadDocument) -> Result<Loaded<CloseApproach>> {
    let columns = CadColumns::locate(&document.fields)
        .map_err(|reason| Error::Data(neoscan_io::Error::InvalidFormat(reason)))?;

    let mut warnings = WarningCollector::new();
    let mut records = Vec::with_capacity(document.data.len());
    for (index, row) in document.data.iter().enumerate() {
        match parse_cad_row(row, columns) {
            Ok(approach) => records.push(approach),
            Err(error) => warnings.add(Warning::MalformedRow {
                line_number: index + 1,
                error,
            }),
        }
    }

    Ok(Loaded { records, warnings })
}

/// Load close approaches from a CNEOS JSON file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a CNEOS document.
pub async fn load_approaches(path: impl AsRef<Path>) -> Result<Loaded<CloseApproach>> {
    let path = path.as_ref();
    let loaded = neoscan_io::read_json_document::<CadDocument, _>(path)
        .await
        .map_err(Error::from)
        .and_then(|document| approaches_from_document(&document))
        .map_err(|e| with_path(e, path))?;
    tracing::info!(
        path = %path.display(),
        approaches = loaded.records.len(),
        warnings = loaded.warnings.len(),
        "Loaded close approaches"
    );
    Ok(loaded)
}

/// Attach the file path to decoding errors. I/O errors already name the
/// failure and pass through unchanged.
fn with_path(error: Error, path: &Path) -> Error {
    match error {
        Error::Data(source @ (neoscan_io::Error::Json(_)
        | neoscan_io::Error::Csv(_)
        | neoscan_io::Error::InvalidFormat(_))) => Error::InvalidData {
            path: path.to_path_buf(),
            reason: source.to_string(),
        },
        other => other,
    }
}
