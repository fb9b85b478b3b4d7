//! Climate Analyzer Library
//!
//! A Rust library for summarizing NOAA tab-delimited climate observation
//! files into per-state aggregate statistics.
//!
//! This library provides tools for:
//! - Parsing TDV observation lines into typed records with unit conversion
//! - Single-pass aggregation of observation streams into per-state running statistics
//! - Merging partial aggregates produced from independent inputs
//! - Rendering summary reports in human-readable, JSON, and CSV formats
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod reporter;
        pub mod tdv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Observation, StateAggregate};
pub use app::services::aggregator::StateAggregator;
pub use config::Config;

/// Result type alias for the climate analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for climate analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be opened
    #[error("Error opening file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A record line could not be parsed into an observation
    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file open error for a recoverable per-file failure
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error with context
    pub fn report_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: message.into(),
            source,
        }
    }

    /// Check if this error is recoverable at the per-file or per-line boundary
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileOpen { .. } | Self::MalformedRecord { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
