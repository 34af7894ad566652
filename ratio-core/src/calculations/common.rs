//! Shared rounding helper for ratio values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, so negative ties
/// mirror positive ones.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ratio_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1.666)), dec!(1.67));
/// assert_eq!(round_half_up(dec!(1.665)), dec!(1.67));
/// assert_eq!(round_half_up(dec!(1.664)), dec!(1.66));
/// assert_eq!(round_half_up(dec!(-1.665)), dec!(-1.67)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
