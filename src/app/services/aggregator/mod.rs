//! Per-state aggregation of observation streams
//!
//! This module maintains the run-wide mapping from state code to running
//! statistics and provides the per-line ingestion routine used by the
//! analyze command. All files in a run fold into the same aggregator;
//! statistics are global across inputs, never reset between files.
//!
//! Lookup is by state-code content in a hash map, so the number of distinct
//! codes is unbounded and find-or-create costs O(1) per observation.
//! Enumeration order for reporting is first-seen, which is stable across
//! runs for a fixed input.

pub mod stats;

#[cfg(test)]
mod tests;

pub use stats::IngestStats;

use indicatif::ProgressBar;
use std::collections::HashMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::models::{Observation, StateAggregate};
use crate::app::services::tdv_parser::parse_observation_line;
use crate::{Error, Result};

/// Aggregates observation streams into per-state running statistics
///
/// The aggregator exclusively owns the collection of [`StateAggregate`]
/// entries for the lifetime of a run. Entries are created on the first
/// observation for a previously-unseen code and never destroyed.
#[derive(Debug, Default)]
pub struct StateAggregator {
    /// State code -> running statistics
    states: HashMap<String, StateAggregate>,
    /// State codes in first-seen order, for stable report enumeration
    order: Vec<String>,
}

impl StateAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the aggregate for its state code
    ///
    /// Creates the aggregate on first sight of a code; otherwise updates
    /// counts, sums, derived averages, and extrema in place. Only ever
    /// called with well-formed observations - malformed lines are rejected
    /// upstream and never reach this fold path.
    pub fn ingest(&mut self, observation: &Observation) {
        match self.states.get_mut(&observation.state_code) {
            Some(aggregate) => aggregate.fold(observation),
            None => {
                self.order.push(observation.state_code.clone());
                self.states.insert(
                    observation.state_code.clone(),
                    StateAggregate::from_observation(observation),
                );
            }
        }
    }

    /// Parse one raw TDV line and fold the result into the aggregate
    ///
    /// Returns an error for a malformed line without touching any state;
    /// the caller decides whether to skip or abort.
    pub fn ingest_line(&mut self, line: &str) -> Result<()> {
        let observation = parse_observation_line(line)?;
        self.ingest(&observation);
        Ok(())
    }

    /// Consume a line-oriented reader, folding every well-formed record
    ///
    /// Malformed lines are skipped and counted (with a bounded sample of
    /// diagnostics retained) unless `fail_fast` is set, in which case the
    /// first malformed line aborts with its parse error. I/O failures are
    /// always propagated; the caller scopes them to the file at hand.
    pub async fn ingest_reader<R>(
        &mut self,
        reader: R,
        fail_fast: bool,
        progress: Option<&ProgressBar>,
    ) -> Result<IngestStats>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut stats = IngestStats::new();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            stats.lines_read += 1;
            if let Some(bar) = progress {
                bar.inc(line.len() as u64 + 1);
            }

            match self.ingest_line(&line) {
                Ok(()) => stats.observations_ingested += 1,
                Err(error @ Error::MalformedRecord { .. }) => {
                    if fail_fast {
                        return Err(error);
                    }
                    let line_number = stats.lines_read;
                    debug!("Skipping malformed line {}: {}", line_number, error);
                    stats.record_skip(line_number, &error);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(stats)
    }

    /// Merge a partial aggregate produced from an independent input
    ///
    /// Uses the same fold rules as sequential ingestion: counts and sums
    /// add, extrema compare-and-replace with ties favoring the entries
    /// already in `self`. Merging partials in a fixed order reproduces a
    /// deterministic result; reordering merges may perturb floating sums at
    /// the precision limit.
    pub fn merge(&mut self, other: StateAggregator) {
        let StateAggregator { mut states, order } = other;

        for code in order {
            let Some(aggregate) = states.remove(&code) else {
                continue;
            };
            match self.states.get_mut(&code) {
                Some(existing) => existing.merge(&aggregate),
                None => {
                    self.order.push(code.clone());
                    self.states.insert(code, aggregate);
                }
            }
        }
    }

    /// State codes in first-seen order
    pub fn state_codes(&self) -> &[String] {
        &self.order
    }

    /// Look up the aggregate for a state code
    pub fn get(&self, code: &str) -> Option<&StateAggregate> {
        self.states.get(code)
    }

    /// Aggregates in first-seen order, for reporting
    pub fn aggregates(&self) -> Vec<&StateAggregate> {
        self.order
            .iter()
            .filter_map(|code| self.states.get(code))
            .collect()
    }

    /// Number of distinct state codes seen
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check whether any observation has been ingested
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
