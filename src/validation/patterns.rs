/*!
 * Heuristics for structurally valid but unlikely numbers.
 *
 * A suspicious number is still valid; it is only flagged for manual
 * review. Rules are evaluated in a fixed priority order and the first
 * match is the only reason reported.
 */

use std::fmt;

/// Reference strings for monotonic digit runs
const ASCENDING_DIGITS: &[u8] = b"0123456789";
const DESCENDING_DIGITS: &[u8] = b"9876543210";

/// Length of a monotonic or repeated run that counts as suspicious
const RUN_LEN: usize = 5;

/// Number of trailing zeros that counts as suspicious
const TRAILING_ZEROS: &str = "0000";

/// Why a number was flagged as suspicious
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuspicionReason {
    /// Every digit is the same
    AllDigitsEqual,
    /// Ends with four or more zeros
    TrailingZeros,
    /// Contains five consecutive ascending digits
    AscendingSequence,
    /// Contains five consecutive descending digits
    DescendingSequence,
    /// Contains a digit repeated five or more times in a row
    RepeatedDigits,
    /// The first eight digits are one pair repeated four times
    RepeatedPair { pair: String },
    /// Contains an `ABABAB` window with two distinct digits
    AlternatingPattern { first: char, second: char },
}

impl fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllDigitsEqual => write!(f, "Todos los dígitos son iguales"),
            Self::TrailingZeros => write!(f, "Termina en 4 o más ceros"),
            Self::AscendingSequence => write!(f, "Contiene secuencia ascendente"),
            Self::DescendingSequence => write!(f, "Contiene secuencia descendente"),
            Self::RepeatedDigits => write!(f, "Más de 4 dígitos consecutivos iguales"),
            Self::RepeatedPair { pair } => write!(f, "Patrón repetitivo ({} x 4)", pair),
            Self::AlternatingPattern { first, second } => {
                write!(f, "Patrón alternante detectado: {}{} x 3", first, second)
            }
        }
    }
}

/// Scan a national number for suspicious digit patterns.
///
/// Returns the first matching reason, or `None` when the number looks normal.
pub fn detect_suspicious_pattern(national: &str) -> Option<SuspicionReason> {
    let digits = national.as_bytes();
    let first = *digits.first()?;

    if digits.iter().all(|&d| d == first) {
        return Some(SuspicionReason::AllDigitsEqual);
    }

    if national.ends_with(TRAILING_ZEROS) {
        return Some(SuspicionReason::TrailingZeros);
    }

    for window in digits.windows(RUN_LEN) {
        if contains_window(ASCENDING_DIGITS, window) {
            return Some(SuspicionReason::AscendingSequence);
        }
        if contains_window(DESCENDING_DIGITS, window) {
            return Some(SuspicionReason::DescendingSequence);
        }
    }

    if longest_digit_run(digits) >= RUN_LEN {
        return Some(SuspicionReason::RepeatedDigits);
    }

    if digits.len() >= 8 {
        let pair = &digits[..2];
        if digits[..8].chunks(2).all(|chunk| chunk == pair) {
            return Some(SuspicionReason::RepeatedPair {
                pair: String::from_utf8_lossy(pair).into_owned(),
            });
        }

        for w in digits.windows(6) {
            if w[0] == w[2] && w[2] == w[4] && w[1] == w[3] && w[3] == w[5] && w[0] != w[1] {
                return Some(SuspicionReason::AlternatingPattern {
                    first: char::from(w[0]),
                    second: char::from(w[1]),
                });
            }
        }
    }

    None
}

fn contains_window(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|candidate| candidate == needle)
}

/// Length of the longest run of one repeated ASCII digit
fn longest_digit_run(digits: &[u8]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for &d in digits {
        if !d.is_ascii_digit() {
            current = 0;
            previous = None;
            continue;
        }
        current = if previous == Some(d) { current + 1 } else { 1 };
        previous = Some(d);
        longest = longest.max(current);
    }

    longest
}
