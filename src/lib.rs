/*!
 * # celcheck - Colombian mobile number validation
 *
 * A Rust library for cleaning, classifying and reporting on Colombian
 * mobile phone numbers.
 *
 * ## Features
 *
 * - Normalize raw input (spaces, dashes, parentheses, `+57` country code)
 * - Check length, mobile range and operator prefix
 * - Identify the mobile operator:
 *   - Tigo, Movistar, Claro, Avantel, ETB, WOM
 *   - Virgin Mobile, Éxito Móvil, Flash Mobile
 * - Flag valid numbers that look fake (repeated or sequential digits)
 * - Batch statistics with duplicate detection
 * - Quality report for failed and processing message deliveries
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `validation`: The classification engine:
 *   - `validation::validator`: Single-number classification
 *   - `validation::batch`: Batch runs and aggregate statistics
 *   - `validation::quality`: Delivery-log quality report
 * - `report`: Text and JSON rendering
 * - `app_config`: Configuration management
 * - `file_utils`: Number lists, delivery logs and report files
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod report;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError};
pub use validation::{
    validate_batch, validate_number, AggregateStats, BatchReport, Category, Operator,
    PhoneValidator, QualityReport, ResultFilter, ValidationResult,
};
