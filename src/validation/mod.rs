/*!
 * Colombian mobile number validation.
 *
 * # Architecture
 *
 * - `cleaner`: Strips formatting and the `+57` country code
 * - `operators`: Maps 3-digit prefixes to mobile operators
 * - `patterns`: Flags valid-but-fake-looking numbers
 * - `validator`: Runs the checks in order and classifies each number
 * - `histogram`: Ordered frequency tables used by the reports
 * - `batch`: Validates lists and aggregates statistics
 * - `quality`: Explains undelivered messages from a delivery log
 */

pub mod cleaner;
pub mod operators;
pub mod patterns;
pub mod validator;
pub mod histogram;
pub mod batch;
pub mod quality;

// Re-export main types
pub use cleaner::{clean_number, strip_country_code, NationalNumber, COUNTRY_CODE};
pub use operators::{identify_operator, Operator, OperatorLabel, OperatorTable, PrefixRange};
pub use patterns::{detect_suspicious_pattern, SuspicionReason};
pub use validator::{
    validate_number, Category, PhoneValidator, RawNumber, RejectionReason, ValidationResult,
};
pub use histogram::Histogram;
pub use batch::{percentage, validate_batch, AggregateStats, BatchReport, ResultFilter};
pub use quality::{DeliveryRecord, DeliveryStatus, FlaggedNumber, QualityReport, ValidationSummary};
