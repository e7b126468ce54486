//! Common utility functions for tax calculations.
//!
//! Rounding helpers and small comparisons shared by every calculator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(173076.923)), dec!(173076.92));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole number, halves away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(6.5)), dec!(7));
/// assert_eq!(round_whole(dec!(6.49)), dec!(6));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the smallest of the given values, or zero for an empty slice.
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::calculations::common::min_of;
///
/// assert_eq!(min_of(&[dec!(300), dec!(100), dec!(200)]), dec!(100));
/// ```
pub fn min_of(values: &[Decimal]) -> Decimal {
    values.iter().copied().min().unwrap_or(Decimal::ZERO)
}
