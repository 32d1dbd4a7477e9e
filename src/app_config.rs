use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{AppError, ConfigError};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Limits for the ranked sections of reports
    #[serde(default)]
    pub report: ReportConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Size limits for "top N" report sections
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    /// Repeated national numbers kept in batch statistics
    #[serde(default = "default_top_repeated")]
    pub top_repeated: usize,

    /// Repeated raw phones kept in the quality report
    #[serde(default = "default_top_raw_repeated")]
    pub top_raw_repeated: usize,

    /// Processing phones kept in the quality report
    #[serde(default = "default_top_ten")]
    pub top_processing: usize,

    /// Prefixes kept in the quality report
    #[serde(default = "default_top_ten")]
    pub top_prefixes: usize,

    /// Provider error codes kept in the quality report
    #[serde(default = "default_top_ten")]
    pub top_error_codes: usize,

    /// Validation issues kept in the quality report summary
    #[serde(default = "default_top_issues")]
    pub top_issues: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_repeated: default_top_repeated(),
            top_raw_repeated: default_top_raw_repeated(),
            top_processing: default_top_ten(),
            top_prefixes: default_top_ten(),
            top_error_codes: default_top_ten(),
            top_issues: default_top_issues(),
        }
    }
}

impl ReportConfig {
    fn limits(&self) -> [(&'static str, usize); 6] {
        [
            ("top_repeated", self.top_repeated),
            ("top_raw_repeated", self.top_raw_repeated),
            ("top_processing", self.top_processing),
            ("top_prefixes", self.top_prefixes),
            ("top_error_codes", self.top_error_codes),
            ("top_issues", self.top_issues),
        ]
    }
}

/// How reports are printed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Format used when no --format flag is given
    #[serde(default)]
    pub format: OutputFormat,

    /// Batches with at least this many numbers show a progress bar
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_top_repeated() -> usize {
    10
}

fn default_top_raw_repeated() -> usize {
    20
}

fn default_top_ten() -> usize {
    10
}

fn default_top_issues() -> usize {
    5
}

fn default_progress_threshold() -> usize {
    1000
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.report.limits() {
            if value == 0 {
                return Err(ConfigError::ZeroLimit(field));
            }
        }

        if self.output.progress_threshold == 0 {
            return Err(ConfigError::ZeroLimit("progress_threshold"));
        }

        Ok(())
    }

    /// Load a config file, writing a default one first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader).map_err(|e| {
                ConfigError::Parse {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)?;
        crate::file_utils::FileManager::write_to_file(path, &config_json)?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            report: ReportConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
