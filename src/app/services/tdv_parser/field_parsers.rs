//! Field parsing utilities for TDV records
//!
//! Helper functions for parsing individual record fields with field-name
//! context in errors. All parsing is explicit and fallible: a field that
//! fails conversion produces an error rather than a fabricated zero, so
//! spurious values can never leak into the running sums.

use crate::constants::STATE_CODE_LEN;
use crate::{Error, Result};

/// Parse a required floating-point field
pub fn parse_required_f64(value: &str, field_name: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::malformed_record(format!(
            "empty value for required field '{}'",
            field_name
        )));
    }

    trimmed.parse::<f64>().map_err(|e| {
        Error::malformed_record(format!(
            "invalid number for field '{}': '{}' ({})",
            field_name, trimmed, e
        ))
    })
}

/// Parse a required integer field
pub fn parse_required_i64(value: &str, field_name: &str) -> Result<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::malformed_record(format!(
            "empty value for required field '{}'",
            field_name
        )));
    }

    trimmed.parse::<i64>().map_err(|e| {
        Error::malformed_record(format!(
            "invalid integer for field '{}': '{}' ({})",
            field_name, trimmed, e
        ))
    })
}

/// Parse and validate a state code field
///
/// State codes are exactly two ASCII letters; anything else marks the
/// record as malformed since the aggregation key would be meaningless.
pub fn parse_state_code(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.len() != STATE_CODE_LEN || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::malformed_record(format!(
            "invalid state code '{}': expected {} ASCII letters",
            trimmed, STATE_CODE_LEN
        )));
    }

    Ok(trimmed.to_string())
}
