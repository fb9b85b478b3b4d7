//! Test utilities for TDV parser testing
//!
//! Shared sample lines and helpers used across the parser test modules.


/// A well-formed sample line taken from real NOAA TDV data
pub const SAMPLE_LINE: &str =
    "CA\t1428300000000\t9prc\t93.0\t0.0\t100.0\t0.0\t95644.0\t277.58716";

/// Build a TDV line from the nine positional field values
pub fn tdv_line(fields: &[&str]) -> String {
    fields.join("\t")
}
