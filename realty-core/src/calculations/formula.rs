//! Formula engine for a single property.
//!
//! | Value               | Formula                                  |
//! |---------------------|------------------------------------------|
//! | net value           | price − down payment                     |
//! | total interest      | net value × (rate / 100) × years         |
//! | total with interest | net value + total interest               |
//! | monthly payment     | total with interest / (years × 12)       |
//! | annual rent         | net value × (rent percent / 100)         |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use realty_core::{PropertyInput, PropertyType, calculations::compute};
//!
//! let input = PropertyInput::new(
//!     PropertyType::House,
//!     dec!(500000),
//!     dec!(100000),
//!     dec!(5.0),
//!     20,
//! );
//! let record = compute(input);
//!
//! assert_eq!(record.net_value(), dec!(400000));
//! assert_eq!(record.total_interest(), dec!(400000));
//! assert_eq!(record.total_with_interest(), dec!(800000));
//! assert_eq!(record.annual_rent(), dec!(20000));
//! ```

use rust_decimal::Decimal;

use crate::models::{PropertyInput, PropertyRecord};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const MONTHS_PER_YEAR: u32 = 12;

/// Computes the derived values for `input`.
///
/// The input must have passed [`crate::validate`]; validated input never
/// overflows, and `years` is at least one so the monthly divisor is never
/// zero.
///
/// # Panics
///
/// Passing input that fails validation is a contract violation. Debug builds
/// panic; release builds log an error and return a record whose derived
/// values are all zero.
pub fn compute(input: PropertyInput) -> PropertyRecord {
    let computed = try_compute(&input);
    debug_assert!(
        computed.is_some(),
        "compute called with input that fails validation: {input:?}"
    );
    computed.unwrap_or_else(|| {
        tracing::error!(?input, "compute called with unvalidated input; returning zeroed record");
        PropertyRecord::new(
            input,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    })
}

/// Checked variant of [`compute`].
///
/// Returns `None` when any intermediate value cannot be represented or when
/// `years` is zero.
pub fn try_compute(input: &PropertyInput) -> Option<PropertyRecord> {
    let net_value = input.price.checked_sub(input.down_payment)?;

    let rate = input.annual_interest_rate_percent.checked_div(HUNDRED)?;
    let years = Decimal::from(input.years);
    let total_interest = net_value.checked_mul(rate)?.checked_mul(years)?;
    let total_with_interest = net_value.checked_add(total_interest)?;

    let months = Decimal::from(input.years.checked_mul(MONTHS_PER_YEAR)?);
    let monthly_payment = total_with_interest.checked_div(months)?;

    let rent_rate = input.annual_rent_percent.checked_div(HUNDRED)?;
    let annual_rent = net_value.checked_mul(rent_rate)?;

    Some(PropertyRecord::new(
        input.clone(),
        net_value,
        total_interest,
        total_with_interest,
        monthly_payment,
        annual_rent,
    ))
}
