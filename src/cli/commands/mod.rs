//! Command implementations for the climate analyzer CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod analyze;
pub mod shared;

// Re-export the main types for convenient access
pub use shared::AnalysisStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the climate analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `analyze`: ingest TDV files and print the per-state summary report
pub async fn run(args: Args) -> Result<AnalysisStats> {
    match args.get_command() {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args).await,
    }
}
