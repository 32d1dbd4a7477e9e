/*!
 * Error types for the celcheck application.
 *
 * Phone validation itself never fails: bad numbers become invalid
 * results. These types cover everything around it, such as configuration,
 * input files and report serialization, using the thiserror crate for
 * ergonomic error definitions.
 */

use thiserror::Error;

/// Errors in the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but is not valid configuration JSON
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// Path of the config file
        path: String,
        /// Parser message
        message: String,
    },

    /// A size limit was set to zero
    #[error("Configuration value '{0}' must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error reading or writing JSON data
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
