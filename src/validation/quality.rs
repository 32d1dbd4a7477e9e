/*!
 * Data-quality report for undelivered WhatsApp messages.
 *
 * Takes the failed and still-processing delivery records supplied by the
 * data source and explains them: which phones repeat, which prefixes
 * dominate, which error codes the provider returned, and how each
 * distinct phone fares against the validator.
 */

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::app_config::ReportConfig;

use super::cleaner::COUNTRY_CODE;
use super::histogram::Histogram;
use super::operators::PREFIX_LEN;
use super::validator::{PhoneValidator, ValidationResult};

/// Delivery status reported by the messaging provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Failed,
    Processing,
    /// Delivered, read or anything else; ignored by the report
    #[serde(other)]
    Other,
}

/// One row of a delivery log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    #[serde(default)]
    pub phone: Option<String>,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub error_code: Option<String>,
}

impl DeliveryRecord {
    pub fn new(phone: Option<&str>, status: DeliveryStatus, error_code: Option<&str>) -> Self {
        Self {
            phone: phone.map(str::to_string),
            status,
            error_code: error_code.map(str::to_string),
        }
    }
}

/// A phone together with the validator's explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedNumber {
    pub phone: String,
    pub detail: String,
}

impl FlaggedNumber {
    fn new(result: &ValidationResult, detail: &str) -> Self {
        Self {
            phone: result.original.clone().unwrap_or_default(),
            detail: detail.to_string(),
        }
    }
}

/// Validation outcome over the distinct phones
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationSummary {
    pub invalid: usize,
    pub valid: usize,
    pub suspicious: usize,
    /// Most common error messages among invalid phones
    pub top_issues: Histogram,
    pub by_category: Histogram,
}

/// Quality report over failed and processing deliveries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityReport {
    pub total_failed: usize,
    pub total_processing: usize,
    /// Distinct raw phone strings across failed and processing records
    pub unique_phones: usize,
    /// Raw phones appearing more than once
    pub repeated_phones: Histogram,
    /// Most frequent phones among processing records
    pub processing_phones: Histogram,
    /// Most frequent 3-digit prefixes among distinct phones
    pub top_prefixes: Histogram,
    /// Most frequent provider error codes among failed records
    pub error_codes: Histogram,
    /// Distinct phones per operator, sentinels included
    pub by_operator: Histogram,
    pub invalid_numbers: Vec<FlaggedNumber>,
    pub suspicious_numbers: Vec<FlaggedNumber>,
    pub summary: ValidationSummary,
}

impl QualityReport {
    /// Build the report with the Colombian validator
    pub fn analyze(records: &[DeliveryRecord], limits: &ReportConfig) -> Self {
        Self::analyze_with(&PhoneValidator::new(), records, limits)
    }

    pub fn analyze_with(
        validator: &PhoneValidator<'_>,
        records: &[DeliveryRecord],
        limits: &ReportConfig,
    ) -> Self {
        let failed: Vec<&DeliveryRecord> = records
            .iter()
            .filter(|r| r.status == DeliveryStatus::Failed)
            .collect();
        let processing: Vec<&DeliveryRecord> = records
            .iter()
            .filter(|r| r.status == DeliveryStatus::Processing)
            .collect();

        let phones: Vec<&str> = failed
            .iter()
            .chain(processing.iter())
            .filter_map(|r| r.phone.as_deref())
            .collect();

        let mut seen = HashSet::new();
        let unique: Vec<&str> = phones.iter().copied().filter(|p| seen.insert(*p)).collect();

        let repeated_phones = Histogram::from_keys(phones.iter().copied())
            .filter_counts(|count| count > 1)
            .top(limits.top_raw_repeated);

        let processing_phones =
            Histogram::from_keys(processing.iter().filter_map(|r| r.phone.as_deref()))
                .top(limits.top_processing);

        let top_prefixes = Histogram::from_keys(unique.iter().filter_map(|p| raw_prefix(p)))
            .top(limits.top_prefixes);

        let error_codes = Histogram::from_keys(failed.iter().filter_map(|r| r.error_code.as_deref()))
            .top(limits.top_error_codes);

        let results: Vec<_> = unique.iter().map(|phone| validator.validate(*phone)).collect();

        let invalid_numbers: Vec<FlaggedNumber> = results
            .iter()
            .filter(|r| !r.is_valid)
            .map(|r| FlaggedNumber::new(r, &r.error_message))
            .collect();
        let suspicious_numbers: Vec<FlaggedNumber> = results
            .iter()
            .filter(|r| r.is_suspicious)
            .map(|r| FlaggedNumber::new(r, &r.suspicion_reason))
            .collect();

        let summary = ValidationSummary {
            invalid: invalid_numbers.len(),
            valid: unique.len() - invalid_numbers.len(),
            suspicious: suspicious_numbers.len(),
            top_issues: Histogram::from_keys(invalid_numbers.iter().map(|f| f.detail.as_str()))
                .top(limits.top_issues),
            by_category: Histogram::from_keys(results.iter().map(|r| r.category.label())),
        };

        let report = Self {
            total_failed: failed.len(),
            total_processing: processing.len(),
            unique_phones: unique.len(),
            repeated_phones,
            processing_phones,
            top_prefixes,
            error_codes,
            by_operator: Histogram::from_keys(results.iter().map(|r| r.operator_name())),
            invalid_numbers,
            suspicious_numbers,
            summary,
        };

        debug!(
            "Quality report: {} failed, {} processing, {} distinct phones, {} invalid",
            report.total_failed, report.total_processing, report.unique_phones, report.summary.invalid
        );

        report
    }
}

/// First three digits after dropping `+`, spaces and a leading `57`.
///
/// Works on the raw text so that malformed phones still show up.
fn raw_prefix(phone: &str) -> Option<String> {
    let compact: String = phone.chars().filter(|c| *c != '+' && *c != ' ').collect();
    let national = compact.strip_prefix(COUNTRY_CODE).unwrap_or(&compact);

    if national.chars().count() < PREFIX_LEN {
        return None;
    }
    Some(national.chars().take(PREFIX_LEN).collect())
}
