//! Common utility functions for contribution calculations.
//!
//! This module provides the rounding rule shared by every derived amount and
//! by the currency formatter, so that displayed values always add up.

use rust_decimal::Decimal;

/// Number of decimal places used for every monetary amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use lankacalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CURRENCY_SCALE,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Renders `value` rounded with [`round_half_up`] and exactly two fractional
/// digits (`4000` becomes `"4000.00"`). Negative zero renders as `"0.00"`.
///
/// Padding happens while printing rather than by rescaling, so values with
/// too many integer digits to hold a scale of two still print two places.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use lankacalc_core::calculations::common::to_two_places;
///
/// assert_eq!(to_two_places(dec!(4000)), "4000.00");
/// assert_eq!(to_two_places(dec!(0.125)), "0.13");
/// assert_eq!(to_two_places(Decimal::MAX), "79228162514264337593543950335.00");
/// ```
pub fn to_two_places(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    format!("{:.prec$}", rounded, prec = CURRENCY_SCALE as usize)
}
