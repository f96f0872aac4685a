//! Atomic write operations for output files.
//!
//! Output is first written to a sibling temporary file, flushed, and then
//! renamed over the target path. Renames within one filesystem are atomic on
//! POSIX, so the target is either the complete old file or the complete new
//! one. A crash can leave the temporary file behind but never a truncated
//! target.

use crate::{JsonlWriter, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Atomically replaces the file at `path` with `contents`.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or
/// if the final rename fails. On failure the target is left unchanged and
/// the temporary file is removed on a best-effort basis.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// neoscan_io::write_atomic("results.csv", b"datetime_utc,distance_au\n").await?;
/// # Ok(())
/// # }
/// ```
pub async fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    let write_result: Result<()> = async {
        let mut file = File::create(&temp_path).await?;
        file.write_all(contents).await?;
        file.flush().await?;
        file.sync_all().await?;
        Ok(())
    }
    .await;

    finish(path, &temp_path, write_result).await?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file atomically");
    Ok(())
}

/// Atomically writes an iterator of values to a JSONL file.
///
/// Values are pulled from the iterator one at a time, so a lazy source is
/// never collected up front.
///
/// # Errors
///
/// See [`write_atomic`]. Serialization errors also abort the write.
pub async fn write_jsonl_atomic_iter<T, I, P>(path: P, values: I) -> Result<usize>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    let write_result: Result<usize> = async {
        let file = File::create(&temp_path).await?;
        let mut writer = JsonlWriter::new(file);
        writer.write_all(values).await?;
        writer.flush().await?;
        Ok(writer.records_written())
    }
    .await;

    let written = finish(path, &temp_path, write_result).await?;
    tracing::debug!(path = %path.display(), records = written, "Wrote JSONL file atomically");
    Ok(written)
}

/// Renames the temp file into place on success, removes it on failure.
async fn finish<T>(path: &Path, temp_path: &Path, write_result: Result<T>) -> Result<T> {
    match write_result {
        Ok(value) => {
            tokio::fs::rename(temp_path, path).await?;
            Ok(value)
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(temp_path).await;
            Err(e)
        }
    }
}

/// Creates a temporary file path for an atomic write.
///
/// `out.json` becomes `out.json.tmp`; `out` becomes `out.tmp`.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}
