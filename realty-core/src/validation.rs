//! Validation gate run before a submission reaches the formula engine.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::try_compute;
use crate::models::PropertyInput;

/// Reasons a submission is rejected. The portfolio is never touched when
/// one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The down payment is larger than the property price.
    #[error("down payment {down_payment} cannot exceed property price {price}")]
    DownPaymentExceedsPrice {
        down_payment: Decimal,
        price: Decimal,
    },

    /// A derived value cannot be represented.
    #[error("values are too large to calculate")]
    ArithmeticOverflow,
}

/// Checks `input` for the rules enforced ahead of computation.
///
/// # Errors
///
/// * [`ValidationError::DownPaymentExceedsPrice`] when `down_payment > price`.
///   Equality is allowed and yields a zero net value.
/// * [`ValidationError::ArithmeticOverflow`] when the derived values would
///   not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use realty_core::{PropertyInput, PropertyType, ValidationError, validate};
///
/// let input = PropertyInput::new(PropertyType::House, dec!(100000), dec!(150000), dec!(5.0), 20);
///
/// assert!(matches!(
///     validate(&input),
///     Err(ValidationError::DownPaymentExceedsPrice { .. })
/// ));
/// ```
pub fn validate(input: &PropertyInput) -> Result<(), ValidationError> {
    if input.down_payment > input.price {
        warn!(
            down_payment = %input.down_payment,
            price = %input.price,
            "Down payment exceeds property price; submission rejected"
        );
        return Err(ValidationError::DownPaymentExceedsPrice {
            down_payment: input.down_payment,
            price: input.price,
        });
    }

    if try_compute(input).is_none() {
        warn!(price = %input.price, years = input.years, "Derived values overflow");
        return Err(ValidationError::ArithmeticOverflow);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PropertyType;

    fn input(
        price: Decimal,
        down_payment: Decimal,
    ) -> PropertyInput {
        PropertyInput::new(PropertyType::House, price, down_payment, dec!(5.0), 20)
    }

    #[test]
    fn validate_accepts_down_payment_below_price() {
        assert_eq!(validate(&input(dec!(500000), dec!(100000))), Ok(()));
    }

    #[test]
    fn validate_accepts_down_payment_equal_to_price() {
        assert_eq!(validate(&input(dec!(200000), dec!(200000))), Ok(()));
    }

    #[test]
    fn validate_rejects_down_payment_above_price() {
        let result = validate(&input(dec!(100000), dec!(150000)));

        assert_eq!(
            result,
            Err(ValidationError::DownPaymentExceedsPrice {
                down_payment: dec!(150000),
                price: dec!(100000),
            })
        );
    }

    #[test]
    fn validate_rejects_by_a_single_cent() {
        let result = validate(&input(dec!(100000.00), dec!(100000.01)));

        assert!(matches!(
            result,
            Err(ValidationError::DownPaymentExceedsPrice { .. })
        ));
    }

    #[test]
    fn validate_reports_overflow_instead_of_panicking() {
        let huge = PropertyInput::new(PropertyType::Villa, Decimal::MAX, dec!(0), dec!(7.0), 25);

        assert_eq!(validate(&huge), Err(ValidationError::ArithmeticOverflow));
    }

    #[test]
    fn error_message_names_both_amounts() {
        let err = validate(&input(dec!(100000), dec!(150000))).unwrap_err();

        assert_eq!(
            err.to_string(),
            "down payment 150000 cannot exceed property price 100000"
        );
    }
}
