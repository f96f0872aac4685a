//! Reading operations for tabular data sources.
//!
//! Files are read asynchronously in one piece and then decoded in memory.
//! CSV decoding is resilient: rows that fail to deserialize are reported as
//! [`Warning`]s and skipped, so one damaged row does not abort the load.

use crate::warning::{Warning, WarningCollector};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a whole file into a string.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or is not valid UTF-8.
pub async fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read data file");
    Ok(content)
}

/// Reads a file and deserializes it as a single JSON document.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if
/// the content is not a valid document of type `T`.
pub async fn read_json_document<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let content = read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Deserializes CSV content row by row, skipping rows that fail.
///
/// The first line is treated as a header row and columns are matched to the
/// fields of `T` by header name, so extra columns are ignored. Header names
/// are trimmed and a leading UTF-8 byte order mark is dropped. Each decoded row is returned with its
/// 1-based line number.
///
/// # Errors
///
/// Returns [`Error::Csv`] if the header row itself cannot be read, and
/// [`Error::InvalidFormat`] if the content has no header row or the header
/// lacks one of the `required` columns.
///
/// # Examples
///
/// ```
/// use neoscan_io::read_csv_resilient;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     pdes: String,
///     diameter: String,
/// }
///
/// let content = "id,pdes,diameter\n1,433,16.84\n2,719\n3,887,\n";
/// let (rows, warnings) = read_csv_resilient::<Row>(content, &["pdes"]).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].0, 2);
/// assert_eq!(rows[0].1.pdes, "433");
/// assert_eq!(warnings.len(), 1);
///
/// assert!(read_csv_resilient::<Row>("id,diameter\n1,2\n", &["pdes"]).is_err());
/// ```
pub fn read_csv_resilient<T>(
    content: &str,
    required: &[&str],
) -> Result<(Vec<(usize, T)>, WarningCollector)>
where
    T: DeserializeOwned,
{
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(Error::InvalidFormat("CSV content has no header row".to_string()));
    }
    if let Some(missing) = required
        .iter()
        .find(|&&column| !headers.iter().any(|header| header == column))
    {
        return Err(Error::InvalidFormat(format!(
            "CSV header has no '{}' column",
            missing
        )));
    }

    let mut rows = Vec::new();
    let mut warnings = WarningCollector::new();

    for (index, record) in reader.records().enumerate() {
        // Header is line 1, so the first data record is line 2.
        let fallback_line = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line_number = e
                    .position()
                    .map_or(fallback_line, |p| usize::try_from(p.line()).unwrap_or(fallback_line));
                warnings.add(Warning::MalformedRow {
                    line_number,
                    error: e.to_string(),
                });
                continue;
            }
        };

        let line_number = record
            .position()
            .map_or(fallback_line, |p| usize::try_from(p.line()).unwrap_or(fallback_line));

        match record.deserialize::<T>(Some(&headers)) {
            Ok(value) => rows.push((line_number, value)),
            Err(e) => warnings.add(Warning::MalformedRow {
                line_number,
                error: e.to_string(),
            }),
        }
    }

    Ok((rows, warnings))
}
