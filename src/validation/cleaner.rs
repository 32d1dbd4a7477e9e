/*!
 * Lexical normalization of raw phone numbers.
 *
 * Two steps, both purely textual:
 * - `clean_number` drops everything except ASCII digits and a leading `+`
 * - `strip_country_code` removes the `+` and a leading `57` country code
 *
 * No length or validity checks happen here.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Colombian country calling code
pub const COUNTRY_CODE: &str = "57";

/// Everything that is neither an ASCII digit nor a plus sign
static NON_DIALABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9+]").expect("Invalid non-dialable character regex")
});

/// Clean a raw phone value down to digits and an optional leading `+`.
///
/// Missing or blank input yields an empty string. A `+` survives only when it
/// comes before every digit; any later or repeated `+` is dropped.
pub fn clean_number(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let kept = NON_DIALABLE_REGEX.replace_all(raw.trim(), "");

    let mut cleaned = String::with_capacity(kept.len());
    for ch in kept.chars() {
        if ch != '+' || cleaned.is_empty() {
            cleaned.push(ch);
        }
    }

    cleaned
}

/// A number with its international prefix removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NationalNumber<'a> {
    /// Remaining text after the `+` and country code were removed
    pub digits: &'a str,
    /// Whether a leading `57` was found and stripped
    pub had_country_code: bool,
}

/// Remove one leading `+` and then a leading `57` country code, if present.
pub fn strip_country_code(cleaned: &str) -> NationalNumber<'_> {
    let unsigned = cleaned.strip_prefix('+').unwrap_or(cleaned);

    match unsigned.strip_prefix(COUNTRY_CODE) {
        Some(digits) => NationalNumber {
            digits,
            had_country_code: true,
        },
        None => NationalNumber {
            digits: unsigned,
            had_country_code: false,
        },
    }
}
