//! Shared components for CLI commands
//!
//! Common types and utilities used by command implementations: run
//! statistics, logging setup, layered configuration resolution, and
//! progress bar styling.

use crate::app::services::aggregator::IngestStats;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Run statistics for reporting across the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    /// Number of input files fully processed
    pub files_processed: usize,
    /// Number of input files skipped (open or read failure)
    pub files_skipped: usize,
    /// Total lines read across all processed files
    pub lines_read: u64,
    /// Total observations folded into the aggregate
    pub observations_ingested: u64,
    /// Total malformed lines skipped
    pub lines_skipped: u64,
    /// Number of distinct state codes found
    pub states_found: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl AnalysisStats {
    /// Accumulate one file's ingestion statistics into the run totals
    pub fn absorb_file(&mut self, stats: &IngestStats) {
        self.lines_read += stats.lines_read;
        self.observations_ingested += stats.observations_ingested;
        self.lines_skipped += stats.lines_skipped;
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} files processed ({} skipped), {} lines read, {} observations ingested, \
             {} malformed lines skipped, {} states found",
            self.files_processed,
            self.files_skipped,
            self.lines_read,
            self.observations_ingested,
            self.lines_skipped,
            self.states_found
        )
    }
}

/// Set up structured logging at the configured level
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn setup_logging(config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter, letting the environment take precedence
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_analyzer={}", config.logging.level)));

    // Standard logging with uptime timestamps, kept off stdout so the
    // report stays machine-readable
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", config.logging.level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &AnalyzeArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }
    if args.fail_fast {
        config.ingest.fail_fast = true;
    }
    if let Some(format) = args.output_format {
        config.report.format = format.as_config_str().to_string();
    }
}

/// Resolve the output format from the final configuration
pub fn resolve_output_format(config: &Config) -> Result<OutputFormat> {
    config.report.format.parse()
}

/// Create a progress bar with appropriate styling for byte-based progress
pub fn create_progress_bar(total_bytes: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
