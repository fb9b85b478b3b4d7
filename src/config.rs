//! Configuration management and validation.
//!
//! Provides layered configuration for the analyzer: built-in defaults,
//! an optional TOML config file, and CLI argument overrides applied by
//! the command layer.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized logging levels, in increasing verbosity
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Recognized report output formats
const REPORT_FORMATS: &[&str] = &["human", "json", "csv"];

/// Top-level configuration for the climate analyzer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ingestion policy settings
    pub ingest: IngestConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Report output settings
    pub report: ReportConfig,
}

/// Ingestion policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Abort the run on the first malformed record line instead of
    /// skipping it and continuing
    pub fail_fast: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, or trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: human, json, or csv
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl Config {
    /// Default configuration file location in the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                Error::configuration("Could not determine user configuration directory")
            })
    }

    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the layered approach (defaults -> file)
    ///
    /// An explicitly given file must exist and parse; the default config
    /// file location is used only when present.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::load(path),
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'. Available levels: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if !REPORT_FORMATS.contains(&self.report.format.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown report format '{}'. Available formats: {}",
                self.report.format,
                REPORT_FORMATS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.ingest.fail_fast);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.report.format, "human");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[ingest]\nfail_fast = true\n\n[logging]\nlevel = \"debug\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.ingest.fail_fast);
        assert_eq!(config.logging.level, "debug");
        // Unspecified sections fall back to defaults
        assert_eq!(config.report.format, "human");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(Config::load(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nformat = \"xml\"\n").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_layered_missing_explicit_file_fails() {
        let result = Config::load_layered(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
    }
}
