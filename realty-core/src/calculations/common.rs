//! Common helpers shared by the calculation and presentation layers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. This is the single
/// rounding rule used when amounts are displayed; stored records are never
/// rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use realty_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3333.3333)), dec!(3333.33));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_repeating_fraction() {
        let monthly = dec!(800000) / dec!(240);

        assert_eq!(round_half_up(monthly), dec!(3333.33));
    }

    #[test]
    fn round_half_up_carries_into_integer_part() {
        assert_eq!(round_half_up(dec!(999999.999)), dec!(1000000.00));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(dec!(0)), dec!(0.00));
    }
}
