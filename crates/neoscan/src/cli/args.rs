//! CLI argument structs for all commands.

use clap::{ArgGroup, Parser};
use chrono::NaiveDate;
use std::path::PathBuf;

use super::validators::{validate_bound, validate_date};
use crate::filters::Criteria;

/// Arguments for the `inspect` command
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the NEO, e.g. "433"
    #[arg(short, long)]
    pub pdes: Option<String>,

    /// IAU name of the NEO, e.g. "Eros"
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also list every close approach of the NEO
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `query` command
///
/// Every filter is optional; all given filters must match.
#[derive(Parser, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = validate_date)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = validate_date)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = validate_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long = "min-distance", value_parser = validate_bound)]
    pub distance_min: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long = "max-distance", value_parser = validate_bound)]
    pub distance_max: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long = "min-velocity", value_parser = validate_bound)]
    pub velocity_min: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long = "max-velocity", value_parser = validate_bound)]
    pub velocity_max: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long = "min-diameter", value_parser = validate_bound)]
    pub diameter_min: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long = "max-diameter", value_parser = validate_bound)]
    pub diameter_max: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 means no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to this .csv, .json or .jsonl file instead of printing
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// The hazard constraint: `None` when neither flag is given.
    pub fn hazard_filter(&self) -> Option<bool> {
        match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

impl From<&QueryArgs> for Criteria {
    fn from(args: &QueryArgs) -> Self {
        Self {
            date: args.date,
            start_date: args.start_date,
            end_date: args.end_date,
            distance_min: args.distance_min,
            distance_max: args.distance_max,
            velocity_min: args.velocity_min,
            velocity_max: args.velocity_max,
            diameter_min: args.diameter_min,
            diameter_max: args.diameter_max,
            hazardous: args.hazard_filter(),
        }
    }
}
