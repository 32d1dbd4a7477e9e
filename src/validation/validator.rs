/*!
 * Colombian mobile number validator.
 *
 * Runs every input through a fixed sequence of checks and stops at the
 * first one that fails:
 *
 * 1. Empty after cleaning
 * 2. Non-digit characters after stripping the country code
 * 3. Length other than 10 digits
 * 4. Not starting with `3` (not a mobile number)
 * 5. Prefix owned by no operator
 *
 * Numbers that pass every check are scanned for suspicious patterns.
 * Bad input never produces an error; it produces an invalid result.
 */

use serde::{Serialize, Serializer};
use std::fmt;

use super::cleaner::{self, COUNTRY_CODE};
use super::operators::{OperatorLabel, OperatorTable, PREFIX_LEN};
use super::patterns;

/// Digits in a Colombian national mobile number
pub const NATIONAL_NUMBER_LEN: usize = 10;

/// Leading digit of every Colombian mobile number
const MOBILE_LEADING_DIGIT: char = '3';

/// Anything that can be handed to the validator as a raw phone value.
///
/// Absent values (`None`) are treated like blank strings.
pub trait RawNumber {
    fn as_raw(&self) -> Option<&str>;
}

impl RawNumber for str {
    fn as_raw(&self) -> Option<&str> {
        Some(self)
    }
}

impl RawNumber for String {
    fn as_raw(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AsRef<str>> RawNumber for Option<T> {
    fn as_raw(&self) -> Option<&str> {
        self.as_ref().map(|value| value.as_ref())
    }
}

impl<T: RawNumber + ?Sized> RawNumber for &T {
    fn as_raw(&self) -> Option<&str> {
        (**self).as_raw()
    }
}

/// Outcome category of the validation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Empty,
    InvalidFormat,
    InvalidLength,
    NotMobile,
    InvalidPrefix,
    Valid,
    ValidSuspicious,
}

impl Category {
    /// Label used in reports and serialized output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "Vacío",
            Self::InvalidFormat => "Formato inválido",
            Self::InvalidLength => "Longitud inválida",
            Self::NotMobile => "No es celular",
            Self::InvalidPrefix => "Prefijo inválido",
            Self::Valid => "Válido",
            Self::ValidSuspicious => "Válido (Sospechoso)",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid | Self::ValidSuspicious)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Why a number was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Nothing left after cleaning
    Empty,
    /// Non-digit characters remain after stripping the country code
    NonNumeric,
    /// Wrong number of digits
    WrongLength { digits: usize },
    /// Does not start with the mobile leading digit
    NotMobile,
    /// Prefix belongs to no operator
    UnknownPrefix { prefix: String },
}

impl RejectionReason {
    pub fn category(&self) -> Category {
        match self {
            Self::Empty => Category::Empty,
            Self::NonNumeric => Category::InvalidFormat,
            Self::WrongLength { .. } => Category::InvalidLength,
            Self::NotMobile => Category::NotMobile,
            Self::UnknownPrefix { .. } => Category::InvalidPrefix,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Número vacío o nulo"),
            Self::NonNumeric => write!(f, "Contiene caracteres no numéricos después de limpiar"),
            Self::WrongLength { digits } => write!(
                f,
                "Longitud inválida: {} dígitos (esperado: {})",
                digits, NATIONAL_NUMBER_LEN
            ),
            Self::NotMobile => write!(f, "No comienza con 3 (no es celular)"),
            Self::UnknownPrefix { prefix } => write!(
                f,
                "Prefijo {} no corresponde a ningún operador colombiano",
                prefix
            ),
        }
    }
}

/// Classification of one raw input. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Raw input exactly as given
    pub original: Option<String>,
    /// Digits-only national number after the country code was stripped
    pub cleaned_national: String,
    /// `+57` followed by `cleaned_national`, built even for invalid input
    pub full_international: String,
    /// Whether a `57` country code was present in the input
    pub had_country_code: bool,
    pub is_valid: bool,
    pub category: Category,
    pub operator: OperatorLabel,
    /// Empty when valid
    pub error_message: String,
    /// Only ever set on valid results
    pub is_suspicious: bool,
    /// Empty unless suspicious
    pub suspicion_reason: String,
}

impl ValidationResult {
    fn rejected(
        original: Option<&str>,
        national: &str,
        had_country_code: bool,
        operator: OperatorLabel,
        reason: RejectionReason,
    ) -> Self {
        Self {
            original: original.map(str::to_string),
            cleaned_national: national.to_string(),
            full_international: international(national),
            had_country_code,
            is_valid: false,
            category: reason.category(),
            operator,
            error_message: reason.to_string(),
            is_suspicious: false,
            suspicion_reason: String::new(),
        }
    }

    /// Operator name shown in reports
    pub fn operator_name(&self) -> String {
        self.operator.to_string()
    }
}

fn international(national: &str) -> String {
    format!("+{}{}", COUNTRY_CODE, national)
}

/// Validator bound to an operator table
#[derive(Debug, Clone, Copy)]
pub struct PhoneValidator<'t> {
    table: &'t OperatorTable,
}

impl PhoneValidator<'static> {
    /// Validator using the Colombian numbering plan
    pub fn new() -> Self {
        Self::with_table(OperatorTable::colombia())
    }
}

impl Default for PhoneValidator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> PhoneValidator<'t> {
    /// Validator using a custom operator table
    pub fn with_table(table: &'t OperatorTable) -> Self {
        Self { table }
    }

    /// Classify one raw phone value
    pub fn validate<R: RawNumber + ?Sized>(&self, raw: &R) -> ValidationResult {
        let original = raw.as_raw();
        let cleaned = cleaner::clean_number(original);

        if cleaned.is_empty() {
            return ValidationResult::rejected(
                original,
                "",
                false,
                OperatorLabel::NotApplicable,
                RejectionReason::Empty,
            );
        }

        let national = cleaner::strip_country_code(&cleaned);
        let digits = national.digits;
        let reject = |operator, reason| {
            ValidationResult::rejected(original, digits, national.had_country_code, operator, reason)
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return reject(OperatorLabel::NotApplicable, RejectionReason::NonNumeric);
        }

        if digits.len() != NATIONAL_NUMBER_LEN {
            return reject(
                OperatorLabel::NotApplicable,
                RejectionReason::WrongLength { digits: digits.len() },
            );
        }

        if !digits.starts_with(MOBILE_LEADING_DIGIT) {
            return reject(OperatorLabel::NotApplicable, RejectionReason::NotMobile);
        }

        let Some(operator) = self.table.identify(digits) else {
            return reject(
                OperatorLabel::Unknown,
                RejectionReason::UnknownPrefix {
                    prefix: digits[..PREFIX_LEN].to_string(),
                },
            );
        };

        let suspicion = patterns::detect_suspicious_pattern(digits);
        let category = if suspicion.is_some() {
            Category::ValidSuspicious
        } else {
            Category::Valid
        };

        ValidationResult {
            original: original.map(str::to_string),
            cleaned_national: digits.to_string(),
            full_international: international(digits),
            had_country_code: national.had_country_code,
            is_valid: true,
            category,
            operator: OperatorLabel::Known(operator),
            error_message: String::new(),
            is_suspicious: suspicion.is_some(),
            suspicion_reason: suspicion.map(|reason| reason.to_string()).unwrap_or_default(),
        }
    }
}

/// Classify one raw phone value against the Colombian numbering plan
pub fn validate_number(raw: Option<&str>) -> ValidationResult {
    PhoneValidator::new().validate(&raw)
}
