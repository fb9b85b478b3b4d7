//! Data models for climate analysis
//!
//! This module contains the core data structures for representing parsed
//! observation records and the per-state running statistics they fold into.

use serde::Serialize;

// =============================================================================
// Observation Record Structure
// =============================================================================

/// A single parsed observation record
///
/// Fully derived from exactly one TDV input line. Observations own no
/// external references and are discarded after folding into the aggregate.
/// Temperatures are already converted to Fahrenheit and timestamps truncated
/// to whole seconds by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Two-letter US state code - the aggregation key
    pub state_code: String,

    /// Observation time in whole seconds since the Unix epoch
    pub timestamp: i64,

    /// Relative humidity percentage, 0-100
    pub humidity: f64,

    /// Snow cover flag, nominally 0 or 1; fractional source values are
    /// preserved here and truncated at fold time
    pub snow_flag: f64,

    /// Cloud cover percentage, 0-100
    pub cloud_cover: f64,

    /// Lightning strike flag, nominally 0 or 1; accumulated as a float
    pub lightning_flag: f64,

    /// Surface temperature in degrees Fahrenheit
    pub surface_temp_f: f64,
}

// =============================================================================
// Per-State Running Statistics
// =============================================================================

/// Running statistics for one state code
///
/// Created on the first observation for a previously-unseen code, mutated on
/// every subsequent observation for that code, and read once at the end of
/// the run by the reporter. Averages are recomputed from their sums on every
/// fold and are never independently mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateAggregate {
    /// The state code this aggregate belongs to, immutable after creation
    pub code: String,

    /// Number of observations folded into this aggregate
    pub record_count: u64,

    /// Running humidity sum, accumulated in encounter order
    #[serde(skip_serializing)]
    pub humidity_sum: f64,

    /// Running cloud cover sum, accumulated in encounter order
    #[serde(skip_serializing)]
    pub cloud_cover_sum: f64,

    /// Running temperature sum, accumulated in encounter order
    #[serde(skip_serializing)]
    pub temperature_sum: f64,

    /// Average humidity percentage (humidity_sum / record_count)
    pub avg_humidity: f64,

    /// Average surface temperature in Fahrenheit (temperature_sum / record_count)
    pub avg_temperature: f64,

    /// Average cloud cover percentage (cloud_cover_sum / record_count)
    pub avg_cloud_cover: f64,

    /// Count of observations with snow cover (truncated flag values)
    pub snow_count: i64,

    /// Lightning strike total (raw flag values, accumulated as a float)
    pub lightning_count: f64,

    /// Highest surface temperature seen so far, in Fahrenheit
    pub max_temp: f64,

    /// Timestamp of the first observation achieving `max_temp`
    pub max_temp_timestamp: i64,

    /// Lowest surface temperature seen so far, in Fahrenheit
    pub min_temp: f64,

    /// Timestamp of the first observation achieving `min_temp`
    pub min_temp_timestamp: i64,
}

impl StateAggregate {
    /// Create a new aggregate seeded from a single observation
    pub fn from_observation(observation: &Observation) -> Self {
        Self {
            code: observation.state_code.clone(),
            record_count: 1,
            humidity_sum: observation.humidity,
            cloud_cover_sum: observation.cloud_cover,
            temperature_sum: observation.surface_temp_f,
            avg_humidity: observation.humidity,
            avg_temperature: observation.surface_temp_f,
            avg_cloud_cover: observation.cloud_cover,
            snow_count: observation.snow_flag as i64,
            lightning_count: observation.lightning_flag,
            max_temp: observation.surface_temp_f,
            max_temp_timestamp: observation.timestamp,
            min_temp: observation.surface_temp_f,
            min_temp_timestamp: observation.timestamp,
        }
    }

    /// Fold one observation into this aggregate
    ///
    /// Sums accumulate in encounter order and averages are recomputed from
    /// them, keeping the aggregate consistent after every call. Extrema are
    /// compared against the stored extremum with strict inequality, so ties
    /// keep the first-seen value and its timestamp.
    pub fn fold(&mut self, observation: &Observation) {
        self.record_count += 1;
        self.humidity_sum += observation.humidity;
        self.cloud_cover_sum += observation.cloud_cover;
        self.temperature_sum += observation.surface_temp_f;
        // Snow flags are truncated toward zero, lightning flags accumulate raw
        self.snow_count += observation.snow_flag as i64;
        self.lightning_count += observation.lightning_flag;
        self.recompute_averages();

        if observation.surface_temp_f > self.max_temp {
            self.max_temp = observation.surface_temp_f;
            self.max_temp_timestamp = observation.timestamp;
        }
        if observation.surface_temp_f < self.min_temp {
            self.min_temp = observation.surface_temp_f;
            self.min_temp_timestamp = observation.timestamp;
        }
    }

    /// Merge a partial aggregate for the same state code into this one
    ///
    /// Counts and sums add, averages are recomputed, and extrema use the
    /// same strict compare-and-replace as `fold`, so ties keep this
    /// aggregate's (first-seen) extremum. Callers are responsible for a
    /// deterministic merge order when bit-identical sums are required.
    pub fn merge(&mut self, other: &StateAggregate) {
        debug_assert_eq!(self.code, other.code);

        self.record_count += other.record_count;
        self.humidity_sum += other.humidity_sum;
        self.cloud_cover_sum += other.cloud_cover_sum;
        self.temperature_sum += other.temperature_sum;
        self.snow_count += other.snow_count;
        self.lightning_count += other.lightning_count;
        self.recompute_averages();

        if other.max_temp > self.max_temp {
            self.max_temp = other.max_temp;
            self.max_temp_timestamp = other.max_temp_timestamp;
        }
        if other.min_temp < self.min_temp {
            self.min_temp = other.min_temp;
            self.min_temp_timestamp = other.min_temp_timestamp;
        }
    }

    fn recompute_averages(&mut self) {
        let count = self.record_count as f64;
        self.avg_humidity = self.humidity_sum / count;
        self.avg_temperature = self.temperature_sum / count;
        self.avg_cloud_cover = self.cloud_cover_sum / count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(temp_f: f64, timestamp: i64) -> Observation {
        Observation {
            state_code: "WA".to_string(),
            timestamp,
            humidity: 60.0,
            snow_flag: 0.0,
            cloud_cover: 40.0,
            lightning_flag: 0.0,
            surface_temp_f: temp_f,
        }
    }

    #[test]
    fn test_from_observation_seeds_all_fields() {
        let obs = Observation {
            state_code: "CA".to_string(),
            timestamp: 1_428_300_000,
            humidity: 93.0,
            snow_flag: 1.0,
            cloud_cover: 100.0,
            lightning_flag: 1.0,
            surface_temp_f: 40.0,
        };

        let aggregate = StateAggregate::from_observation(&obs);
        assert_eq!(aggregate.code, "CA");
        assert_eq!(aggregate.record_count, 1);
        assert_eq!(aggregate.avg_humidity, 93.0);
        assert_eq!(aggregate.avg_temperature, 40.0);
        assert_eq!(aggregate.avg_cloud_cover, 100.0);
        assert_eq!(aggregate.snow_count, 1);
        assert_eq!(aggregate.lightning_count, 1.0);
        assert_eq!(aggregate.max_temp, 40.0);
        assert_eq!(aggregate.min_temp, 40.0);
        assert_eq!(aggregate.max_temp_timestamp, 1_428_300_000);
        assert_eq!(aggregate.min_temp_timestamp, 1_428_300_000);
    }

    #[test]
    fn test_fold_updates_counts_sums_and_averages() {
        let mut aggregate = StateAggregate::from_observation(&observation(52.0, 100));
        aggregate.fold(&observation(60.0, 200));

        assert_eq!(aggregate.record_count, 2);
        assert_eq!(aggregate.avg_temperature, 56.0);
        assert_eq!(aggregate.max_temp, 60.0);
        assert_eq!(aggregate.max_temp_timestamp, 200);
        assert_eq!(aggregate.min_temp, 52.0);
        assert_eq!(aggregate.min_temp_timestamp, 100);
    }

    #[test]
    fn test_fold_extrema_ties_keep_first_seen() {
        let mut aggregate = StateAggregate::from_observation(&observation(52.0, 100));
        aggregate.fold(&observation(52.0, 200));

        // Equal values must not update either extremum's timestamp
        assert_eq!(aggregate.max_temp_timestamp, 100);
        assert_eq!(aggregate.min_temp_timestamp, 100);
    }

    #[test]
    fn test_fold_truncates_fractional_snow_flags() {
        let mut obs = observation(50.0, 100);
        obs.snow_flag = 0.9;
        let mut aggregate = StateAggregate::from_observation(&obs);
        assert_eq!(aggregate.snow_count, 0);

        obs.snow_flag = 1.7;
        aggregate.fold(&obs);
        assert_eq!(aggregate.snow_count, 1);
    }

    #[test]
    fn test_fold_accumulates_raw_lightning_flags() {
        let mut obs = observation(50.0, 100);
        obs.lightning_flag = 0.5;
        let mut aggregate = StateAggregate::from_observation(&obs);
        obs.lightning_flag = 1.0;
        aggregate.fold(&obs);

        assert_eq!(aggregate.lightning_count, 1.5);
    }

    #[test]
    fn test_averages_stay_consistent_with_sums() {
        let mut aggregate = StateAggregate::from_observation(&observation(50.0, 1));
        for i in 2..=10 {
            aggregate.fold(&observation(50.0 + i as f64, i));
        }

        let count = aggregate.record_count as f64;
        assert_eq!(aggregate.avg_temperature, aggregate.temperature_sum / count);
        assert_eq!(aggregate.avg_humidity, aggregate.humidity_sum / count);
        assert_eq!(aggregate.avg_cloud_cover, aggregate.cloud_cover_sum / count);
    }

    #[test]
    fn test_merge_matches_sequential_fold() {
        let first = observation(52.0, 100);
        let second = observation(60.0, 200);
        let third = observation(48.0, 300);

        let mut sequential = StateAggregate::from_observation(&first);
        sequential.fold(&second);
        sequential.fold(&third);

        let mut left = StateAggregate::from_observation(&first);
        left.fold(&second);
        let right = StateAggregate::from_observation(&third);

        let mut merged = left;
        merged.merge(&right);

        assert_eq!(merged.record_count, sequential.record_count);
        assert_eq!(merged.max_temp, sequential.max_temp);
        assert_eq!(merged.max_temp_timestamp, sequential.max_temp_timestamp);
        assert_eq!(merged.min_temp, sequential.min_temp);
        assert_eq!(merged.min_temp_timestamp, sequential.min_temp_timestamp);
        assert!((merged.avg_temperature - sequential.avg_temperature).abs() < 1e-9);
    }

    #[test]
    fn test_merge_ties_favor_first_seen_extremum() {
        let mut left = StateAggregate::from_observation(&observation(60.0, 100));
        let right = StateAggregate::from_observation(&observation(60.0, 900));
        left.merge(&right);

        assert_eq!(left.max_temp_timestamp, 100);
        assert_eq!(left.min_temp_timestamp, 100);
    }

    #[test]
    fn test_json_serialization_omits_internal_sums() {
        let aggregate = StateAggregate::from_observation(&observation(50.0, 100));
        let json = serde_json::to_string(&aggregate).unwrap();

        assert!(json.contains("\"avg_temperature\""));
        assert!(json.contains("\"record_count\""));
        assert!(!json.contains("humidity_sum"));
        assert!(!json.contains("temperature_sum"));
    }
}
