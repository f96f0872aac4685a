//! Command execution logic.

use anyhow::Result;
use std::io::{self, Write};

use super::args::{InspectArgs, QueryArgs};
use crate::app::App;
use crate::database::ApproachSource;
use crate::filters::{create_filters, Criteria};
use crate::limit::limit;
use crate::output::{self, OutputMode};
use crate::write::{write_results, ApproachRecord, OutputFormat};

/// Results printed to the terminal when no limit is given.
pub const DEFAULT_PRINT_LIMIT: usize = 10;

/// Execute the inspect command
pub fn execute_inspect(app: &App, args: &InspectArgs, output_mode: OutputMode) -> Result<()> {
    let db = app.database();
    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };

    let Some(neo) = neo else {
        eprintln!("{}", output::warning("No matching NEOs exist in the database."));
        return Ok(());
    };

    match output_mode {
        OutputMode::Json => {
            let mut value = serde_json::json!({
                "designation": neo.designation.as_str(),
                "name": neo.name.as_deref().unwrap_or_default(),
                "diameter_km": neo.diameter,
                "potentially_hazardous": neo.hazardous,
            });
            if args.verbose {
                let approaches: Vec<ApproachRecord<'_>> =
                    db.approaches_for(neo).map(ApproachRecord::from).collect();
                value["approaches"] = serde_json::to_value(approaches)?;
            }
            output::print_json(&value)?;
        }
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            output::print_neo(&mut handle, neo, db.approaches_for(neo), args.verbose)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Execute the query command
pub async fn execute_query(app: &App, args: &QueryArgs, output_mode: OutputMode) -> Result<()> {
    let criteria = Criteria::from(args);
    let filters = create_filters(&criteria);
    let matches = app.database().query(&filters)?;
    let requested = args.limit.or(app.config().default_limit);

    match &args.outfile {
        Some(path) => {
            // Reject the extension before doing any work.
            OutputFormat::from_path(path)?;
            let written = write_results(path, limit(matches, requested)).await?;

            match output_mode {
                OutputMode::Json => output::print_json(&serde_json::json!({
                    "outfile": path.display().to_string(),
                    "written": written,
                }))?,
                OutputMode::Text => println!(
                    "{} Wrote {} close approaches to {}",
                    output::success("✓"),
                    written,
                    output::info(&path.display().to_string())
                ),
            }
        }
        None => {
            let n = requested.filter(|&n| n > 0).unwrap_or(DEFAULT_PRINT_LIMIT);
            let printed = match output_mode {
                OutputMode::Json => output::print_approaches_json(limit(matches, Some(n)))?,
                OutputMode::Text => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    let printed = output::print_approaches(&mut handle, limit(matches, Some(n)))?;
                    handle.flush()?;
                    printed
                }
            };
            if printed == 0 && output_mode == OutputMode::Text {
                eprintln!("{}", output::warning("No matching close approaches."));
            }
        }
    }

    Ok(())
}
