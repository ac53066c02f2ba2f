//! Currency formatting for displayed amounts.

use rust_decimal::Decimal;

use crate::calculations::common::to_two_places;

/// ISO 4217 code prefixed to every formatted amount.
pub const CURRENCY_CODE: &str = "LKR";

/// Formats `value` as `"LKR <amount>"` with exactly two decimal places.
///
/// Rounding follows [`round_half_up`](crate::calculations::common::round_half_up).
/// No thousands separators are inserted.
///
/// ```
/// use rust_decimal_macros::dec;
/// use lankacalc_core::format_currency;
///
/// assert_eq!(format_currency(dec!(4000)), "LKR 4000.00");
/// assert_eq!(format_currency(dec!(0)), "LKR 0.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{CURRENCY_CODE} {}", to_two_places(value))
}

/// Formats a floating-point amount; NaN and infinities format as zero.
///
/// ```
/// use lankacalc_core::format_currency_f64;
///
/// assert_eq!(format_currency_f64(4000.0), "LKR 4000.00");
/// assert_eq!(format_currency_f64(f64::NAN), "LKR 0.00");
/// ```
pub fn format_currency_f64(value: f64) -> String {
    if !value.is_finite() {
        return format_currency(Decimal::ZERO);
    }
    match Decimal::from_f64_retain(value) {
        Some(decimal) => format_currency(decimal),
        // Finite but beyond the decimal range; fall back to float formatting.
        None => format!("{CURRENCY_CODE} {value:.2}"),
    }
}
