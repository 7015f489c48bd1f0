//! Range constraints enforced by the input-collection layer.
//!
//! The validation gate treats these as preconditions. Front ends that build
//! [`PropertyInput`] values from untrusted text (forms, CSV files) check
//! them with [`check_form_bounds`] before submitting.
//!
//! | Field          | Allowed values            |
//! |----------------|---------------------------|
//! | price          | ≥ 10,000                  |
//! | down payment   | ≥ 0                       |
//! | interest rate  | 1.0 ..= 7.0, step 0.1     |
//! | years          | 1 ..= 25                  |
//! | rent percent   | 0.0 ..= 100.0             |

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PropertyInput;

pub const MIN_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
pub const MIN_RATE_PERCENT: Decimal = Decimal::ONE;
pub const MAX_RATE_PERCENT: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
/// Rates are offered in tenths of a percent.
pub const RATE_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
pub const YEARS: RangeInclusive<u32> = 1..=25;
pub const MAX_RENT_PERCENT: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    #[error("property price {0} is below the minimum of {min}", min = MIN_PRICE)]
    PriceBelowMinimum(Decimal),

    #[error("down payment cannot be negative, got {0}")]
    NegativeDownPayment(Decimal),

    #[error("interest rate {0}% must be between {min}% and {max}%", min = MIN_RATE_PERCENT, max = MAX_RATE_PERCENT)]
    RateOutOfRange(Decimal),

    #[error("interest rate {0}% must be a multiple of {step}%", step = RATE_STEP)]
    RateOffStep(Decimal),

    #[error("loan duration of {0} years must be between 1 and 25")]
    YearsOutOfRange(u32),

    #[error("rent percentage {0}% must be between 0% and {max}%", max = MAX_RENT_PERCENT)]
    RentOutOfRange(Decimal),
}

/// Returns the interest rates a form would offer: 1.0, 1.1, … 7.0.
pub fn rate_choices() -> Vec<Decimal> {
    (10..=70).map(|tenths| Decimal::new(tenths, 1)).collect()
}

/// Checks every form-level constraint on `input`.
///
/// The down-payment-versus-price rule is not checked here; that belongs to
/// [`crate::validate`].
///
/// # Errors
///
/// Returns the first [`BoundsError`] encountered, in field order.
pub fn check_form_bounds(input: &PropertyInput) -> Result<(), BoundsError> {
    if input.price < MIN_PRICE {
        return Err(BoundsError::PriceBelowMinimum(input.price));
    }
    if input.down_payment < Decimal::ZERO {
        return Err(BoundsError::NegativeDownPayment(input.down_payment));
    }

    let rate = input.annual_interest_rate_percent;
    if rate < MIN_RATE_PERCENT || rate > MAX_RATE_PERCENT {
        return Err(BoundsError::RateOutOfRange(rate));
    }
    if !(rate / RATE_STEP).fract().is_zero() {
        return Err(BoundsError::RateOffStep(rate));
    }

    if !YEARS.contains(&input.years) {
        return Err(BoundsError::YearsOutOfRange(input.years));
    }

    let rent = input.annual_rent_percent;
    if rent < Decimal::ZERO || rent > MAX_RENT_PERCENT {
        return Err(BoundsError::RentOutOfRange(rent));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PropertyType;

    fn valid() -> PropertyInput {
        PropertyInput::new(PropertyType::Apartment, dec!(150000), dec!(30000), dec!(4.5), 15)
    }

    #[test]
    fn accepts_typical_input() {
        assert_eq!(check_form_bounds(&valid()), Ok(()));
    }

    #[test]
    fn accepts_every_boundary_value() {
        let input = PropertyInput {
            price: dec!(10000),
            down_payment: dec!(0),
            annual_interest_rate_percent: dec!(7.0),
            years: 25,
            annual_rent_percent: dec!(100.0),
            ..valid()
        };
        assert_eq!(check_form_bounds(&input), Ok(()));

        let input = PropertyInput {
            annual_interest_rate_percent: dec!(1.0),
            years: 1,
            annual_rent_percent: dec!(0.0),
            ..valid()
        };
        assert_eq!(check_form_bounds(&input), Ok(()));
    }

    #[test]
    fn rejects_price_below_minimum() {
        let input = PropertyInput {
            price: dec!(9999.99),
            ..valid()
        };

        assert_eq!(
            check_form_bounds(&input),
            Err(BoundsError::PriceBelowMinimum(dec!(9999.99)))
        );
    }

    #[test]
    fn rejects_negative_down_payment() {
        let input = PropertyInput {
            down_payment: dec!(-1),
            ..valid()
        };

        assert_eq!(
            check_form_bounds(&input),
            Err(BoundsError::NegativeDownPayment(dec!(-1)))
        );
    }

    #[test]
    fn rejects_rate_outside_range() {
        for rate in [dec!(0.9), dec!(7.1)] {
            let input = PropertyInput {
                annual_interest_rate_percent: rate,
                ..valid()
            };
            assert_eq!(check_form_bounds(&input), Err(BoundsError::RateOutOfRange(rate)));
        }
    }

    #[test]
    fn rejects_rate_between_steps() {
        let input = PropertyInput {
            annual_interest_rate_percent: dec!(4.25),
            ..valid()
        };

        assert_eq!(
            check_form_bounds(&input),
            Err(BoundsError::RateOffStep(dec!(4.25)))
        );
    }

    #[test]
    fn rejects_years_outside_range() {
        for years in [0, 26] {
            let input = PropertyInput { years, ..valid() };
            assert_eq!(check_form_bounds(&input), Err(BoundsError::YearsOutOfRange(years)));
        }
    }

    #[test]
    fn rejects_rent_above_one_hundred_percent() {
        let input = PropertyInput {
            annual_rent_percent: dec!(100.1),
            ..valid()
        };

        assert_eq!(
            check_form_bounds(&input),
            Err(BoundsError::RentOutOfRange(dec!(100.1)))
        );
    }

    #[test]
    fn rate_choices_cover_one_to_seven_in_tenths() {
        let choices = rate_choices();

        assert_eq!(choices.len(), 61);
        assert_eq!(choices.first(), Some(&dec!(1.0)));
        assert_eq!(choices.last(), Some(&dec!(7.0)));
        assert!(choices.iter().all(|rate| check_form_bounds(&PropertyInput {
            annual_interest_rate_percent: *rate,
            ..valid()
        })
        .is_ok()));
    }
}
