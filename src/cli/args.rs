//! Command-line argument definitions for the climate analyzer
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Argument values act as overrides on top of the layered configuration; the
//! command layer resolves the final settings.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the climate analyzer
///
/// Summarizes NOAA tab-delimited climate observation data into per-state
/// aggregate statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate-analyzer",
    version,
    about = "Summarize NOAA tab-delimited climate observation files into per-state statistics",
    long_about = "Reads NOAA TDV observation files and produces, per US state, aggregate \
                  statistics: record counts, average humidity, temperature and cloud cover, \
                  temperature extremes with the time each occurred, lightning strike totals, \
                  and snow cover counts. Statistics accumulate across all files in a run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the climate analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze TDV observation files and print a per-state summary (main command)
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input TDV observation files to analyze
    ///
    /// Files are consumed in argument order and all fold into the same
    /// run-wide aggregate. A file that cannot be opened is reported and
    /// skipped; the remaining files are still processed.
    #[arg(
        value_name = "FILE",
        required = true,
        num_args = 1..,
        help = "TDV observation files to analyze"
    )]
    pub files: Vec<PathBuf>,

    /// Output format for the summary report
    ///
    /// Defaults to the configured format (human unless overridden in the
    /// config file).
    #[arg(
        long = "output-format",
        value_enum,
        value_name = "FORMAT",
        help = "Output format for the summary report"
    )]
    pub output_format: Option<OutputFormat>,

    /// Abort the run on the first malformed record line
    ///
    /// By default malformed lines are skipped and counted, and the report
    /// reflects only successfully parsed records.
    #[arg(long = "fail-fast", help = "Abort on the first malformed record line")]
    pub fail_fast: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for default settings. If not specified,
    /// looks for config.toml in the user config directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the report itself. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors and the report",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl OutputFormat {
    /// The configuration-file spelling of this format
    pub fn as_config_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(Error::configuration(format!(
                "Unknown report format '{}'. Available formats: human, json, csv",
                s
            ))),
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Log level implied by the verbosity flags, if any were given
    ///
    /// Returns `None` when neither `-v` nor `-q` was passed, so the
    /// configured default applies.
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
