use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PropertyType;

/// Rent percentage used when the caller does not supply one.
pub const DEFAULT_ANNUAL_RENT_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

/// Raw values collected for one property by the input form.
///
/// Range constraints (minimum price, rate and term bounds) belong to the
/// collection layer; see [`crate::bounds`]. The only rule enforced before
/// computation is the down payment check in [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub property_type: PropertyType,
    pub price: Decimal,
    pub down_payment: Decimal,
    /// Annual interest rate in percent, e.g. `5.0` for 5%.
    pub annual_interest_rate_percent: Decimal,
    /// Loan term in whole years.
    pub years: u32,
    /// Expected annual rent as a percentage of the net value.
    pub annual_rent_percent: Decimal,
}

impl PropertyInput {
    /// Creates an input using [`DEFAULT_ANNUAL_RENT_PERCENT`] for the rent.
    pub fn new(
        property_type: PropertyType,
        price: Decimal,
        down_payment: Decimal,
        annual_interest_rate_percent: Decimal,
        years: u32,
    ) -> Self {
        Self {
            property_type,
            price,
            down_payment,
            annual_interest_rate_percent,
            years,
            annual_rent_percent: DEFAULT_ANNUAL_RENT_PERCENT,
        }
    }

    pub fn with_annual_rent_percent(
        mut self,
        annual_rent_percent: Decimal,
    ) -> Self {
        self.annual_rent_percent = annual_rent_percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_rent_percent_is_five_with_one_decimal() {
        assert_eq!(DEFAULT_ANNUAL_RENT_PERCENT, dec!(5.0));
        assert_eq!(DEFAULT_ANNUAL_RENT_PERCENT.to_string(), "5.0");
    }

    #[test]
    fn new_applies_default_rent_percent() {
        let input = PropertyInput::new(
            PropertyType::House,
            dec!(250000),
            dec!(50000),
            dec!(4.5),
            15,
        );

        assert_eq!(input.annual_rent_percent, dec!(5.0));
    }

    #[test]
    fn with_annual_rent_percent_overrides_default() {
        let input = PropertyInput::new(
            PropertyType::Villa,
            dec!(900000),
            dec!(0),
            dec!(3.0),
            25,
        )
        .with_annual_rent_percent(dec!(7.5));

        assert_eq!(input.annual_rent_percent, dec!(7.5));
    }
}
