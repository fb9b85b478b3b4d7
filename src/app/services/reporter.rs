//! Report rendering for per-state aggregate statistics
//!
//! Renders the final aggregate set in the layout of the original NOAA
//! summary reports, plus JSON and CSV formats for scripting. The reporter
//! only ever reads the aggregates; it is handed the full set once, at the
//! end of a run.

use chrono::DateTime;

use crate::app::models::StateAggregate;
use crate::constants::TIMESTAMP_DISPLAY_FORMAT;
use crate::{Error, Result};

/// Render the human-readable summary report
///
/// Starts with the space-separated list of all state codes found, then one
/// detail block per state in the order given (first-seen order when the set
/// comes straight from the aggregator).
pub fn render_human(aggregates: &[&StateAggregate]) -> String {
    let codes: Vec<&str> = aggregates.iter().map(|a| a.code.as_str()).collect();

    let mut lines = Vec::new();
    lines.push(format!("States found: {}", codes.join(" ")));

    for aggregate in aggregates {
        lines.push(format!("-- State: {} --", aggregate.code));
        lines.push(format!("Number of Records: {}", aggregate.record_count));
        lines.push(format!("Average Humidity: {:.1}%", aggregate.avg_humidity));
        lines.push(format!(
            "Average Temperature: {:.1}F",
            aggregate.avg_temperature
        ));
        lines.push(format!("Max Temperature: {:.1}F", aggregate.max_temp));
        lines.push(format!(
            "Max Temperature on: {}",
            format_timestamp(aggregate.max_temp_timestamp)
        ));
        lines.push(format!("Min Temperature: {:.1}F", aggregate.min_temp));
        lines.push(format!(
            "Min Temperature on: {}",
            format_timestamp(aggregate.min_temp_timestamp)
        ));
        lines.push(format!(
            "Lightning Strikes: {:.0}",
            aggregate.lightning_count
        ));
        lines.push(format!(
            "Records with Snow Cover: {}",
            aggregate.snow_count
        ));
        lines.push(format!(
            "Average Cloud Cover: {:.1}%",
            aggregate.avg_cloud_cover
        ));
        lines.push("---------------------------".to_string());
    }

    lines.join("\n")
}

/// Render the summary report as pretty-printed JSON
pub fn render_json(aggregates: &[&StateAggregate]) -> Result<String> {
    let codes: Vec<&str> = aggregates.iter().map(|a| a.code.as_str()).collect();

    let report = serde_json::json!({
        "states_found": codes,
        "states": aggregates,
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::report_serialization("Failed to serialize report to JSON", e))
}

/// Render the summary report as CSV, one row per state
pub fn render_csv(aggregates: &[&StateAggregate]) -> String {
    let mut rows = Vec::new();
    rows.push(
        "state,record_count,avg_humidity,avg_temperature,max_temp,max_temp_timestamp,\
         min_temp,min_temp_timestamp,lightning_strikes,snow_cover_records,avg_cloud_cover"
            .to_string(),
    );

    for aggregate in aggregates {
        rows.push(format!(
            "{},{},{:.1},{:.1},{:.1},{},{:.1},{},{:.0},{},{:.1}",
            aggregate.code,
            aggregate.record_count,
            aggregate.avg_humidity,
            aggregate.avg_temperature,
            aggregate.max_temp,
            aggregate.max_temp_timestamp,
            aggregate.min_temp,
            aggregate.min_temp_timestamp,
            aggregate.lightning_count,
            aggregate.snow_count,
            aggregate.avg_cloud_cover,
        ));
    }

    rows.join("\n")
}

/// Format a Unix timestamp as a ctime(3)-style UTC string
///
/// A timestamp outside chrono's representable range renders as the raw
/// seconds value rather than failing the report.
fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format(TIMESTAMP_DISPLAY_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Observation;

    fn aggregate(code: &str, temp_f: f64, timestamp: i64) -> StateAggregate {
        StateAggregate::from_observation(&Observation {
            state_code: code.to_string(),
            timestamp,
            humidity: 61.25,
            snow_flag: 1.0,
            cloud_cover: 54.5,
            lightning_flag: 1.0,
            surface_temp_f: temp_f,
        })
    }

    #[test]
    fn test_format_timestamp_ctime_layout() {
        assert_eq!(format_timestamp(0), "Thu Jan  1 00:00:00 1970");
        assert_eq!(format_timestamp(1_428_300_000), "Mon Apr  6 06:00:00 2015");
    }

    #[test]
    fn test_render_human_layout() {
        let wa = aggregate("WA", 52.9, 1_428_300_000);
        let tn = aggregate("TN", 58.3, 1_428_300_000);
        let report = render_human(&[&wa, &tn]);

        assert!(report.starts_with("States found: WA TN\n"));
        assert!(report.contains("-- State: WA --"));
        assert!(report.contains("-- State: TN --"));
        assert!(report.contains("Number of Records: 1"));
        assert!(report.contains("Average Humidity: 61.2%"));
        assert!(report.contains("Average Temperature: 52.9F"));
        assert!(report.contains("Max Temperature: 52.9F"));
        assert!(report.contains("Max Temperature on: Mon Apr  6 06:00:00 2015"));
        assert!(report.contains("Lightning Strikes: 1"));
        assert!(report.contains("Records with Snow Cover: 1"));
        assert!(report.contains("Average Cloud Cover: 54.5%"));
        // WA details come before TN details, matching first-seen order
        assert!(report.find("-- State: WA --").unwrap() < report.find("-- State: TN --").unwrap());
    }

    #[test]
    fn test_render_human_empty_input() {
        let report = render_human(&[]);
        assert_eq!(report, "States found: ");
    }

    #[test]
    fn test_render_json_round_trips() {
        let wa = aggregate("WA", 52.9, 1_428_300_000);
        let json = render_json(&[&wa]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["states_found"][0], "WA");
        assert_eq!(value["states"][0]["code"], "WA");
        assert_eq!(value["states"][0]["record_count"], 1);
        assert!(value["states"][0].get("temperature_sum").is_none());
    }

    #[test]
    fn test_render_csv_one_row_per_state() {
        let wa = aggregate("WA", 52.9, 100);
        let tn = aggregate("TN", 58.3, 200);
        let csv = render_csv(&[&wa, &tn]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("state,record_count"));
        assert!(lines[1].starts_with("WA,1,61.2,52.9,52.9,100"));
        assert!(lines[2].starts_with("TN,1,"));
    }
}
