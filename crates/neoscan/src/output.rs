//! Terminal output for CLI commands.
//!
//! Results go to stdout either as text or as JSON for programmatic use.
//! Status messages are colored unless `NO_COLOR` is set or `NEOSCAN_COLOR`
//! is `0`/`false`.

use crate::domain::{CloseApproach, NearEarthObject};
use crate::write::ApproachRecord;
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for programmatic use
    Json,
}

/// Returns `true` if status messages should be colored.
pub fn use_colors() -> bool {
    env::var("NO_COLOR").is_err()
        && env::var("NEOSCAN_COLOR")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true)
}

/// Green text for completed actions.
pub fn success(text: &str) -> String {
    if use_colors() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

/// Yellow text for non-fatal problems.
pub fn warning(text: &str) -> String {
    if use_colors() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// Cyan text for identifiers.
pub fn info(text: &str) -> String {
    if use_colors() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{}", json)
}

/// Print approaches one per line, pulling lazily. Returns how many were printed.
pub fn print_approaches<'a, W, I>(w: &mut W, approaches: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let mut printed = 0;
    for approach in approaches {
        writeln!(w, "{}", approach)?;
        printed += 1;
    }
    Ok(printed)
}

/// Print approaches as a JSON array on stdout. Returns how many were printed.
pub fn print_approaches_json<'a, I>(approaches: I) -> io::Result<usize>
where
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let records: Vec<ApproachRecord<'a>> = approaches.into_iter().map(ApproachRecord::from).collect();
    print_json(&records)?;
    Ok(records.len())
}

/// Print a NEO and, when `verbose`, each of its approaches indented below it.
pub fn print_neo<'a, W, I>(
    w: &mut W,
    neo: &NearEarthObject,
    approaches: I,
    verbose: bool,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    writeln!(w, "{}", neo)?;
    if verbose {
        for approach in approaches {
            writeln!(w, "- {}", approach)?;
        }
    }
    Ok(())
}
