//! Tests for ingestion statistics

use crate::Error;
use crate::app::services::aggregator::IngestStats;
use crate::constants::MAX_SKIP_SAMPLES;

#[test]
fn test_new_stats_are_empty() {
    let stats = IngestStats::new();
    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.observations_ingested, 0);
    assert_eq!(stats.lines_skipped, 0);
    assert!(stats.skip_samples.is_empty());
    assert_eq!(stats.success_rate(), 100.0);
}

#[test]
fn test_record_skip_counts_and_samples() {
    let mut stats = IngestStats::new();
    stats.record_skip(7, &Error::malformed_record("expected 9 fields, found 3"));

    assert_eq!(stats.lines_skipped, 1);
    assert_eq!(stats.skip_samples.len(), 1);
    assert!(stats.skip_samples[0].contains("line 7"));
    assert!(stats.skip_samples[0].contains("expected 9 fields"));
}

#[test]
fn test_skip_samples_are_bounded() {
    let mut stats = IngestStats::new();
    for i in 0..(MAX_SKIP_SAMPLES as u64 + 50) {
        stats.record_skip(i + 1, &Error::malformed_record("bad line"));
    }

    // Every skip is counted, but only a bounded sample is retained
    assert_eq!(stats.lines_skipped, MAX_SKIP_SAMPLES as u64 + 50);
    assert_eq!(stats.skip_samples.len(), MAX_SKIP_SAMPLES);
}

#[test]
fn test_success_rate() {
    let stats = IngestStats {
        lines_read: 10,
        observations_ingested: 9,
        lines_skipped: 1,
        skip_samples: vec![],
    };
    assert!((stats.success_rate() - 90.0).abs() < 1e-9);
}

#[test]
fn test_summary_mentions_all_counts() {
    let stats = IngestStats {
        lines_read: 10,
        observations_ingested: 8,
        lines_skipped: 2,
        skip_samples: vec![],
    };
    let summary = stats.summary();
    assert!(summary.contains("10 lines read"));
    assert!(summary.contains("8 observations"));
    assert!(summary.contains("2 skipped"));
}
