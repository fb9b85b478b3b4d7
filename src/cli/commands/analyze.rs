//! Analyze command implementation for the climate analyzer CLI
//!
//! This module contains the complete analysis workflow: configuration
//! loading, per-file ingestion with recoverable open failures, and report
//! generation.

use super::shared::{
    AnalysisStats, create_progress_bar, load_configuration, resolve_output_format, setup_logging,
};
use crate::app::services::aggregator::{IngestStats, StateAggregator};
use crate::app::services::reporter;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing::{debug, info, warn};

/// Analyze command runner for the climate analyzer
///
/// This function orchestrates the entire analysis workflow:
/// 1. Resolve configuration and set up logging
/// 2. Ingest each input file into one run-wide aggregate
/// 3. Render the summary report in the requested format
pub async fn run_analyze(args: AnalyzeArgs) -> Result<AnalysisStats> {
    let start_time = Instant::now();

    // Validate arguments and resolve layered configuration before logging,
    // so the subscriber comes up at the configured level
    args.validate()?;
    let config = load_configuration(&args)?;
    setup_logging(&config)?;

    info!("Starting climate analyzer");
    debug!("Command line arguments: {:?}", args);
    debug!("Resolved configuration: {:?}", config);

    let output_format = resolve_output_format(&config)?;

    // Ingest every readable input file into the same aggregate
    let mut aggregator = StateAggregator::new();
    let mut stats =
        ingest_files(&args.files, &mut aggregator, &config, args.show_progress()).await?;

    stats.states_found = aggregator.len();
    stats.processing_time = start_time.elapsed();

    // Render the final report to stdout
    let aggregates = aggregator.aggregates();
    let report = match output_format {
        OutputFormat::Human => reporter::render_human(&aggregates),
        OutputFormat::Json => reporter::render_json(&aggregates)?,
        OutputFormat::Csv => reporter::render_csv(&aggregates),
    };
    println!("{}", report);

    if stats.lines_skipped > 0 {
        eprintln!(
            "{}",
            format!(
                "Warning: {} malformed record lines were skipped",
                stats.lines_skipped
            )
            .yellow()
        );
    }

    info!(
        "Analysis complete in {}: {}",
        HumanDuration(stats.processing_time),
        stats.summary()
    );

    Ok(stats)
}

/// Ingest each input file into the aggregator, skipping unreadable files
///
/// A file that cannot be opened, or that fails mid-read, is reported and
/// skipped; the remaining files are still processed. Only malformed-line
/// failures under the fail-fast policy (and internal errors) abort the run.
pub async fn ingest_files(
    paths: &[PathBuf],
    aggregator: &mut StateAggregator,
    config: &Config,
    show_progress: bool,
) -> Result<AnalysisStats> {
    let mut stats = AnalysisStats::default();

    for path in paths {
        match ingest_file(path, aggregator, config, show_progress).await {
            Ok(file_stats) => {
                info!("Completed {}: {}", path.display(), file_stats.summary());
                stats.files_processed += 1;
                stats.absorb_file(&file_stats);
            }
            Err(error @ (Error::FileOpen { .. } | Error::Io { .. })) => {
                warn!("Skipping {}: {}", path.display(), error);
                eprintln!("{}", error.to_string().red());
                stats.files_skipped += 1;
            }
            Err(error) => return Err(error),
        }
    }

    Ok(stats)
}

/// Ingest a single file, line by line, into the aggregator
async fn ingest_file(
    path: &Path,
    aggregator: &mut StateAggregator,
    config: &Config,
    show_progress: bool,
) -> Result<IngestStats> {
    info!("Opening file: {}", path.display());

    let file = File::open(path)
        .await
        .map_err(|e| Error::file_open(path.display().to_string(), e))?;
    let file_len = file.metadata().await.map(|m| m.len()).unwrap_or(0);

    let progress = if show_progress && file_len > 0 {
        Some(create_progress_bar(
            file_len,
            &path.display().to_string(),
        ))
    } else {
        None
    };

    let result = aggregator
        .ingest_reader(BufReader::new(file), config.ingest.fail_fast, progress.as_ref())
        .await;

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    let stats = result?;
    if stats.lines_skipped > 0 {
        warn!(
            "{}: skipped {} malformed lines",
            path.display(),
            stats.lines_skipped
        );
        for sample in &stats.skip_samples {
            debug!("{}: {}", path.display(), sample);
        }
    }

    Ok(stats)
}
