//! Application constants for the climate analyzer
//!
//! This module contains the TDV record layout, unit conversion factors,
//! and default values used throughout the application.

// =============================================================================
// TDV Record Layout
// =============================================================================

/// Minimum number of tab-separated fields in a well-formed record line
pub const RECORD_FIELD_COUNT: usize = 9;

/// Expected length of a state code (two ASCII letters)
pub const STATE_CODE_LEN: usize = 2;

/// Positional field indices within a TDV record line
pub mod field_index {
    /// Two-letter US state code - the aggregation key
    pub const STATE_CODE: usize = 0;

    /// Observation time in milliseconds since the Unix epoch
    pub const TIMESTAMP_MS: usize = 1;

    /// Geohash of the observation location (read but unused)
    pub const GEOHASH: usize = 2;

    /// Relative humidity percentage, 0-100
    pub const HUMIDITY: usize = 3;

    /// Snow cover flag, nominally 0 or 1
    pub const SNOW: usize = 4;

    /// Cloud cover percentage, 0-100
    pub const CLOUD_COVER: usize = 5;

    /// Lightning strike flag, nominally 0 or 1
    pub const LIGHTNING: usize = 6;

    /// Surface pressure in Pascals (read but unused)
    pub const PRESSURE: usize = 7;

    /// Surface temperature in Kelvin
    pub const SURFACE_TEMP_K: usize = 8;
}

// =============================================================================
// Unit Conversion
// =============================================================================

/// Milliseconds per second, for timestamp truncation
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Kelvin to Fahrenheit scale factor
pub const KELVIN_TO_FAHRENHEIT_SCALE: f64 = 9.0 / 5.0;

/// Kelvin to Fahrenheit offset: F = K * 9/5 - 459.67
pub const KELVIN_TO_FAHRENHEIT_OFFSET: f64 = 459.67;

// =============================================================================
// Reporting and Diagnostics
// =============================================================================

/// ctime(3)-style timestamp format used in the human-readable report
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Maximum number of skipped-line diagnostics retained per file
pub const MAX_SKIP_SAMPLES: usize = 16;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "climate-analyzer";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
