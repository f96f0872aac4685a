//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `inspect`: Show one NEO, looked up by designation or name
//! - `query`: Filter close approaches and print or save the results
//!
//! # Global Flags
//!
//! - `--neofile` / `--cadfile`: Data files (override `neoscan.yaml`)
//! - `--config`: Explicit configuration file
//! - `--json`: Output in JSON format
//!
//! # Example
//!
//! ```bash
//! neoscan inspect --name Eros --verbose
//! neoscan query --start-date 2020-01-01 --max-distance 0.1 --hazardous --limit 5
//! neoscan query --date 2020-01-01 --outfile results.csv
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{InspectArgs, QueryArgs};
pub use execute::DEFAULT_PRINT_LIMIT;
pub use validators::{validate_bound, validate_date};

/// Neoscan - explore close approaches of near-Earth objects
///
/// Loads NEO data from a JPL small-body CSV export and close-approach data
/// from a CNEOS JSON document, then answers inspect and query commands.
#[derive(Parser, Debug)]
#[command(name = "neoscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the NEO CSV file
    #[arg(long, global = true, value_name = "PATH")]
    pub neofile: Option<PathBuf>,

    /// Path to the close-approach JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub cadfile: Option<PathBuf>,

    /// Path to a neoscan.yaml configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inspect one NEO
    ///
    /// Looks the NEO up by primary designation or by IAU name. With
    /// `--verbose`, also lists each of its close approaches.
    Inspect(InspectArgs),

    /// Query close approaches
    ///
    /// Prints approaches matching every given filter, or writes them to a
    /// CSV, JSON or JSONL file with `--outfile`.
    Query(QueryArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::config::{ConfigOverrides, NeoscanConfig};
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("Neoscan near-Earth object explorer");
            println!("Use --help for more information");
            return Ok(());
        };

        let overrides = ConfigOverrides {
            neos_path: self.neofile.clone(),
            approaches_path: self.cadfile.clone(),
        };
        let config =
            NeoscanConfig::resolve(&std::env::current_dir()?, self.config.as_deref(), overrides)
                .await?;
        let app = App::load(config).await?;

        match command {
            Commands::Inspect(args) => execute::execute_inspect(&app, args, output_mode),
            Commands::Query(args) => execute::execute_query(&app, args, output_mode).await,
        }
    }
}
