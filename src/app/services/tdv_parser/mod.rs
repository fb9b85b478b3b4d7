//! TDV record parsing for NOAA climate observation files
//!
//! Parses one tab-delimited record line into a typed [`Observation`],
//! performing timestamp and temperature unit conversion along the way.
//! Parsing is pure: a line either yields an observation or a
//! `MalformedRecord` error, never a partially-populated record. The policy
//! for what happens to malformed lines (skip-and-count vs. abort) belongs to
//! the ingestion layer, not to this module.
//!
//! [`Observation`]: crate::app::models::Observation

pub mod field_parsers;
pub mod record_parser;

#[cfg(test)]
mod tests;

pub use record_parser::{kelvin_to_fahrenheit, parse_observation_line};
