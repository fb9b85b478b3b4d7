//! Ingestion statistics for aggregation runs
//!
//! Tracks per-file line counts and skip diagnostics so the command layer
//! can report what the final aggregate does and does not reflect.

use crate::Error;
use crate::constants::MAX_SKIP_SAMPLES;

/// Statistics for one ingestion pass over a line-oriented input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestStats {
    /// Total number of lines read from the input
    pub lines_read: u64,

    /// Number of lines successfully parsed and folded
    pub observations_ingested: u64,

    /// Number of malformed lines skipped
    pub lines_skipped: u64,

    /// Bounded sample of skip diagnostics, for logging
    pub skip_samples: Vec<String>,
}

impl IngestStats {
    /// Create new empty ingestion statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped line, retaining a bounded sample of diagnostics
    pub fn record_skip(&mut self, line_number: u64, error: &Error) {
        self.lines_skipped += 1;
        if self.skip_samples.len() < MAX_SKIP_SAMPLES {
            self.skip_samples
                .push(format!("line {}: {}", line_number, error));
        }
    }

    /// Fraction of lines successfully ingested, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            100.0
        } else {
            (self.observations_ingested as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} lines read, {} observations ingested, {} skipped ({:.1}% success)",
            self.lines_read,
            self.observations_ingested,
            self.lines_skipped,
            self.success_rate()
        )
    }
}
