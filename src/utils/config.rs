use chrono::{Datelike, Local};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "data/pass.txt";
pub const DEFAULT_DISPLAY_LIMIT: usize = 2;
pub const MIN_YEAR: i64 = 1;
pub const MAX_YEAR: i64 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command line arguments. With no arguments the run reads `data/pass.txt`
/// and prints the first two valid records.
#[derive(Debug, Parser)]
#[command(name = "passcheck", version, about = "Validate a batch of passport records")]
pub struct Cli {
    /// Batch file with blank-line separated records
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Number of valid records to print
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    pub display_limit: usize,

    /// Reference year for age and validity windows (defaults to the system clock)
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_YEAR..=MAX_YEAR))]
    pub year: Option<i32>,

    /// Output layout: the console report or JSON
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub source: PathBuf,
    pub display_limit: usize,
    pub current_year: i32,
    pub format: OutputFormat,
}

impl BatchConfig {
    pub fn from_cli(cli: Cli) -> Self {
        BatchConfig {
            source: cli.source,
            display_limit: cli.display_limit,
            current_year: cli.year.unwrap_or_else(current_year),
            format: cli.format,
        }
    }
}

/// Calendar year on the local clock. Read once per run.
pub fn current_year() -> i32 {
    Local::now().naive_local().date().year()
}
