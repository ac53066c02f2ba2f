//! Keystroke filtering and parsing of the raw earnings text.
//!
//! The filter is a pure predicate so the input field can consult it on every
//! edit without any rendering context. Parsing never fails loudly: anything
//! that is not a usable nonnegative amount becomes `None`.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{trace, warn};

/// Digits, at most one decimal point, digits. Both halves may be empty.
static EARNINGS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*\.?[0-9]*$").expect("earnings pattern is a valid regex")
});

/// Returns `true` if `candidate` may replace the current earnings text.
///
/// ```
/// use lankacalc_core::is_acceptable_earnings_input;
///
/// assert!(is_acceptable_earnings_input(""));
/// assert!(is_acceptable_earnings_input("50000.25"));
/// assert!(!is_acceptable_earnings_input("12a"));
/// assert!(!is_acceptable_earnings_input("5..5"));
/// ```
pub fn is_acceptable_earnings_input(candidate: &str) -> bool {
    candidate.is_empty() || EARNINGS_PATTERN.is_match(candidate)
}

/// Largest earnings amount the calculator can represent (`Decimal::MAX`,
/// 29 integer digits).
pub const MAX_EARNINGS: Decimal = Decimal::MAX;

/// Parses earnings text into a nonnegative amount.
///
/// Returns `None` for empty text, a lone decimal point, anything that is not
/// a decimal number, and negative values. A missing whole or fractional part
/// is allowed (`"5."`, `".5"`). There is no upper cap below [`MAX_EARNINGS`];
/// a well-formed number beyond it cannot be represented and is also `None`,
/// with a warning logged (see [`exceeds_max_earnings`]).
///
/// ```
/// use rust_decimal_macros::dec;
/// use lankacalc_core::parse_earnings;
///
/// assert_eq!(parse_earnings("50000"), Some(dec!(50000)));
/// assert_eq!(parse_earnings(".5"), Some(dec!(0.5)));
/// assert_eq!(parse_earnings("."), None);
/// assert_eq!(parse_earnings("-5"), None);
/// ```
pub fn parse_earnings(raw: &str) -> Option<Decimal> {
    let normalized = normalize_earnings_text(raw)?;
    let value = match Decimal::from_str(&normalized) {
        Ok(value) => value,
        Err(e) if exceeds_max_earnings(raw) => {
            warn!(input = %raw, max = %MAX_EARNINGS, "earnings exceed the supported range: {}", e);
            return None;
        }
        Err(e) => {
            trace!(input = %raw, "earnings not parseable: {}", e);
            return None;
        }
    };
    if value < Decimal::ZERO {
        trace!(input = %raw, "negative earnings treated as absent");
        return None;
    }
    Some(value)
}

/// Returns `true` when `raw` is a well-formed nonnegative number whose whole
/// part is larger than [`MAX_EARNINGS`].
///
/// ```
/// use lankacalc_core::input::exceeds_max_earnings;
///
/// assert!(exceeds_max_earnings("100000000000000000000000000000"));
/// assert!(!exceeds_max_earnings("79228162514264337593543950335"));
/// assert!(!exceeds_max_earnings("12a"));
/// ```
pub fn exceeds_max_earnings(raw: &str) -> bool {
    let trimmed = raw.trim();
    if !is_acceptable_earnings_input(trimmed) {
        return false;
    }
    let whole = trimmed
        .split_once('.')
        .map_or(trimmed, |(whole, _)| whole)
        .trim_start_matches('0');
    let max = MAX_EARNINGS.to_string();
    whole.len() > max.len() || (whole.len() == max.len() && whole > max.as_str())
}

/// Fills in an omitted whole or fractional part so `"5."` and `".5"` parse.
fn normalize_earnings_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let whole = if whole.is_empty() { "0" } else { whole };
    if fraction.is_empty() {
        Some(format!("{sign}{whole}"))
    } else {
        Some(format!("{sign}{whole}.{fraction}"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // is_acceptable_earnings_input tests
    // =========================================================================

    #[test]
    fn filter_accepts_empty_string() {
        assert!(is_acceptable_earnings_input(""));
    }

    #[test]
    fn filter_accepts_digits_and_single_point() {
        for candidate in ["0", "50000", "50000.", ".5", "1234.5678", "."] {
            assert!(
                is_acceptable_earnings_input(candidate),
                "expected {candidate:?} to be accepted"
            );
        }
    }

    #[test]
    fn filter_rejects_letters_signs_and_repeated_points() {
        for candidate in ["12a", "-5", "+5", "5..5", "1.2.3", "1,000", " 5", "1e5"] {
            assert!(
                !is_acceptable_earnings_input(candidate),
                "expected {candidate:?} to be rejected"
            );
        }
    }

    #[test]
    fn filter_rejects_non_ascii_digits() {
        // Arabic-Indic digit five.
        assert!(!is_acceptable_earnings_input("\u{0665}"));
    }

    // =========================================================================
    // parse_earnings tests
    // =========================================================================

    #[test]
    fn parse_earnings_reads_whole_numbers() {
        assert_eq!(parse_earnings("50000"), Some(dec!(50000)));
    }

    #[test]
    fn parse_earnings_reads_fractions() {
        assert_eq!(parse_earnings("1234.56"), Some(dec!(1234.56)));
    }

    #[test]
    fn parse_earnings_allows_missing_fraction_digits() {
        assert_eq!(parse_earnings("5."), Some(dec!(5)));
    }

    #[test]
    fn parse_earnings_allows_missing_whole_digits() {
        assert_eq!(parse_earnings(".25"), Some(dec!(0.25)));
    }

    #[test]
    fn parse_earnings_empty_is_absent() {
        assert_eq!(parse_earnings(""), None);
        assert_eq!(parse_earnings("   "), None);
    }

    #[test]
    fn parse_earnings_lone_point_is_absent() {
        assert_eq!(parse_earnings("."), None);
    }

    #[test]
    fn parse_earnings_negative_is_absent() {
        assert_eq!(parse_earnings("-5"), None);
        assert_eq!(parse_earnings("-0.01"), None);
    }

    #[test]
    fn parse_earnings_garbage_is_absent() {
        assert_eq!(parse_earnings("abc"), None);
        assert_eq!(parse_earnings("5..5"), None);
    }

    #[test]
    fn parse_earnings_accepts_largest_representable_amount() {
        assert_eq!(
            parse_earnings("79228162514264337593543950335"),
            Some(MAX_EARNINGS)
        );
        assert_eq!(
            parse_earnings("1000000000000000000000000000"),
            Some(dec!(1000000000000000000000000000))
        );
    }

    #[test]
    fn parse_earnings_beyond_representable_range_is_absent() {
        assert_eq!(parse_earnings("100000000000000000000000000000"), None);
        assert_eq!(parse_earnings(&"9".repeat(40)), None);
    }

    // =========================================================================
    // exceeds_max_earnings tests
    // =========================================================================

    #[test]
    fn exceeds_max_earnings_flags_only_wider_whole_parts() {
        assert!(exceeds_max_earnings("100000000000000000000000000000"));
        assert!(exceeds_max_earnings("79228162514264337593543950336"));
        assert!(!exceeds_max_earnings("79228162514264337593543950335"));
        assert!(!exceeds_max_earnings("000079228162514264337593543950335"));
        assert!(!exceeds_max_earnings("50000"));
    }

    #[test]
    fn exceeds_max_earnings_ignores_malformed_text() {
        assert!(!exceeds_max_earnings("1e40"));
        assert!(!exceeds_max_earnings(""));
        assert!(!exceeds_max_earnings("."));
    }
}
