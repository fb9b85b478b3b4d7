//! Test utilities for aggregator testing
//!
//! Shared observation builders and TDV line helpers used across the
//! aggregator test modules.

use crate::app::models::Observation;

mod stats_tests;

/// Build an observation with the given code and temperature, other fields fixed
pub fn observation(state_code: &str, surface_temp_f: f64, timestamp: i64) -> Observation {
    Observation {
        state_code: state_code.to_string(),
        timestamp,
        humidity: 60.0,
        snow_flag: 0.0,
        cloud_cover: 40.0,
        lightning_flag: 0.0,
        surface_temp_f,
    }
}

/// Build a well-formed TDV line for the given state and Kelvin temperature
pub fn tdv_line(state_code: &str, timestamp_ms: i64, kelvin: f64) -> String {
    format!(
        "{}\t{}\t9prc\t93.0\t0.0\t100.0\t0.0\t95644.0\t{}",
        state_code, timestamp_ms, kelvin
    )
}
