use rust_decimal::Decimal;
use serde::Serialize;

use super::{PropertyInput, PropertyType};

/// A computed property entry.
///
/// Created only by [`crate::calculations::compute`]; fields are private so
/// the derived values can never drift from the input they were computed
/// from. Values keep full precision, rounding happens at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRecord {
    input: PropertyInput,
    net_value: Decimal,
    total_interest: Decimal,
    total_with_interest: Decimal,
    monthly_payment: Decimal,
    annual_rent: Decimal,
}

impl PropertyRecord {
    pub(crate) fn new(
        input: PropertyInput,
        net_value: Decimal,
        total_interest: Decimal,
        total_with_interest: Decimal,
        monthly_payment: Decimal,
        annual_rent: Decimal,
    ) -> Self {
        Self {
            input,
            net_value,
            total_interest,
            total_with_interest,
            monthly_payment,
            annual_rent,
        }
    }

    pub fn input(&self) -> &PropertyInput {
        &self.input
    }

    pub fn property_type(&self) -> PropertyType {
        self.input.property_type
    }

    pub fn price(&self) -> Decimal {
        self.input.price
    }

    pub fn down_payment(&self) -> Decimal {
        self.input.down_payment
    }

    pub fn annual_interest_rate_percent(&self) -> Decimal {
        self.input.annual_interest_rate_percent
    }

    pub fn years(&self) -> u32 {
        self.input.years
    }

    pub fn annual_rent_percent(&self) -> Decimal {
        self.input.annual_rent_percent
    }

    /// Price minus down payment; the amount actually financed.
    pub fn net_value(&self) -> Decimal {
        self.net_value
    }

    pub fn total_interest(&self) -> Decimal {
        self.total_interest
    }

    pub fn total_with_interest(&self) -> Decimal {
        self.total_with_interest
    }

    pub fn monthly_payment(&self) -> Decimal {
        self.monthly_payment
    }

    pub fn annual_rent(&self) -> Decimal {
        self.annual_rent
    }
}
