//! Individual record line parsing for TDV files
//!
//! Converts one raw tab-delimited line into a typed observation with unit
//! conversion applied: millisecond timestamps truncate to whole seconds,
//! Kelvin surface temperatures convert to Fahrenheit.

use super::field_parsers::{parse_required_f64, parse_required_i64, parse_state_code};
use crate::app::models::Observation;
use crate::constants::{
    KELVIN_TO_FAHRENHEIT_OFFSET, KELVIN_TO_FAHRENHEIT_SCALE, MILLIS_PER_SECOND,
    RECORD_FIELD_COUNT, field_index,
};
use crate::{Error, Result};

/// Parse a single observation record from a raw TDV line
///
/// The line must carry at least nine tab-separated fields:
/// state code, timestamp (ms), geohash, humidity, snow flag, cloud cover,
/// lightning flag, pressure, surface temperature (Kelvin). Geohash and
/// pressure are positional only and never parsed.
pub fn parse_observation_line(line: &str) -> Result<Observation> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();

    if fields.len() < RECORD_FIELD_COUNT {
        return Err(Error::malformed_record(format!(
            "expected at least {} tab-separated fields, found {}",
            RECORD_FIELD_COUNT,
            fields.len()
        )));
    }

    let state_code = parse_state_code(fields[field_index::STATE_CODE])?;
    let timestamp_ms = parse_required_i64(fields[field_index::TIMESTAMP_MS], "timestamp")?;
    let humidity = parse_required_f64(fields[field_index::HUMIDITY], "humidity")?;
    let snow_flag = parse_required_f64(fields[field_index::SNOW], "snow")?;
    let cloud_cover = parse_required_f64(fields[field_index::CLOUD_COVER], "cloud cover")?;
    let lightning_flag = parse_required_f64(fields[field_index::LIGHTNING], "lightning")?;
    let surface_temp_k =
        parse_required_f64(fields[field_index::SURFACE_TEMP_K], "surface temperature")?;

    Ok(Observation {
        state_code,
        // Truncating division: millisecond source, whole-second storage
        timestamp: timestamp_ms / MILLIS_PER_SECOND,
        humidity,
        snow_flag,
        cloud_cover,
        lightning_flag,
        surface_temp_f: kelvin_to_fahrenheit(surface_temp_k),
    })
}

/// Convert a Kelvin temperature to Fahrenheit: F = K * 9/5 - 459.67
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * KELVIN_TO_FAHRENHEIT_SCALE - KELVIN_TO_FAHRENHEIT_OFFSET
}
