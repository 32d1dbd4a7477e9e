/*!
 * Batch validation and aggregate statistics.
 *
 * Every input is validated independently, in order. Duplicates are
 * validated and counted once per occurrence.
 */

use anyhow::{Result, anyhow};
use log::debug;
use serde::Serialize;
use std::fmt;

use super::histogram::Histogram;
use super::operators::Operator;
use super::validator::{PhoneValidator, RawNumber, ValidationResult};

/// Default number of repeated numbers kept in the summary
pub const DEFAULT_TOP_REPEATED: usize = 10;

/// Percentage rounded to two decimals; zero for an empty total
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Summary statistics over a set of validation results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub percentage_valid: f64,
    pub percentage_invalid: f64,
    pub suspicious: usize,
    pub percentage_suspicious: f64,
    /// Results per category
    pub categories: Histogram,
    /// Valid results per operator
    pub operators: Histogram,
    /// Distinct national numbers seen more than once
    pub duplicate_numbers: usize,
    /// Most repeated national numbers with their frequency
    pub top_repeated: Histogram,
}

impl AggregateStats {
    /// Fold results into counts; `top_n` bounds `top_repeated`
    pub fn from_results(results: &[ValidationResult], top_n: usize) -> Self {
        let total = results.len();
        let valid = results.iter().filter(|r| r.is_valid).count();
        let invalid = total - valid;
        let suspicious = results.iter().filter(|r| r.is_suspicious).count();

        let categories = Histogram::from_keys(results.iter().map(|r| r.category.label()));
        let operators = Histogram::from_keys(
            results
                .iter()
                .filter(|r| r.is_valid)
                .map(|r| r.operator_name()),
        );

        // Keyed on the stripped number, so blank inputs share the empty key
        let repeated =
            Histogram::from_keys(results.iter().map(|r| r.cleaned_national.as_str()))
                .filter_counts(|count| count > 1);

        Self {
            total,
            valid,
            invalid,
            percentage_valid: percentage(valid, total),
            percentage_invalid: percentage(invalid, total),
            suspicious,
            percentage_suspicious: percentage(suspicious, total),
            categories,
            operators,
            duplicate_numbers: repeated.len(),
            top_repeated: repeated.top(top_n),
        }
    }
}

/// Results of a batch run in input order, with their statistics
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub stats: AggregateStats,
    pub results: Vec<ValidationResult>,
}

impl BatchReport {
    pub fn from_results(results: Vec<ValidationResult>, top_n: usize) -> Self {
        let stats = AggregateStats::from_results(&results, top_n);

        debug!(
            "Batch complete: {}/{} valid, {} suspicious, {} duplicated numbers",
            stats.valid, stats.total, stats.suspicious, stats.duplicate_numbers
        );

        Self { stats, results }
    }

    /// Results matching a filter, in input order
    pub fn filtered(&self, filter: &ResultFilter) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| filter.matches(r)).collect()
    }
}

impl<'t> PhoneValidator<'t> {
    /// Validate every input in order and aggregate the results
    pub fn validate_batch<I>(&self, inputs: I, top_n: usize) -> BatchReport
    where
        I: IntoIterator,
        I::Item: RawNumber,
    {
        let results = inputs.into_iter().map(|raw| self.validate(&raw)).collect();
        BatchReport::from_results(results, top_n)
    }
}

/// Validate a batch against the Colombian numbering plan
pub fn validate_batch<I>(inputs: I) -> BatchReport
where
    I: IntoIterator,
    I::Item: RawNumber,
{
    PhoneValidator::new().validate_batch(inputs, DEFAULT_TOP_REPEATED)
}

/// Selection of results to display or export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFilter {
    #[default]
    All,
    Valid,
    Invalid,
    Suspicious,
    /// Valid numbers of one operator
    Operator(Operator),
}

impl ResultFilter {
    pub fn matches(&self, result: &ValidationResult) -> bool {
        match self {
            Self::All => true,
            Self::Valid => result.is_valid,
            Self::Invalid => !result.is_valid,
            Self::Suspicious => result.is_suspicious,
            Self::Operator(operator) => {
                result.is_valid && result.operator.operator() == Some(*operator)
            }
        }
    }
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
            Self::Suspicious => write!(f, "suspicious"),
            Self::Operator(operator) => write!(f, "operator:{}", operator),
        }
    }
}

impl std::str::FromStr for ResultFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some((kind, name)) = trimmed.split_once(':') {
            if kind.eq_ignore_ascii_case("operator") {
                return Ok(Self::Operator(name.parse()?));
            }
            return Err(anyhow!("Invalid filter: {}", s));
        }

        match trimmed.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "valid" => Ok(Self::Valid),
            "invalid" => Ok(Self::Invalid),
            "suspicious" => Ok(Self::Suspicious),
            _ => Err(anyhow!("Invalid filter: {}", s)),
        }
    }
}
