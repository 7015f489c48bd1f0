//! CSV loader for property submissions.
//!
//! Stands in for the interactive form: each row becomes one
//! [`PropertyInput`], checked against the same bounds the form enforces.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column                 | Required | Type    | Notes                                   |
//! |------------------------|----------|---------|-----------------------------------------|
//! | `property_type`        | yes      | string  | `Apartment`, `House` or `Villa`         |
//! | `price`                | yes      | decimal | at least `10000`                        |
//! | `down_payment`         | yes      | decimal | `0` or more                             |
//! | `interest_rate`        | yes      | decimal | `1.0` to `7.0` in steps of `0.1`        |
//! | `years`                | yes      | integer | `1` to `25`                             |
//! | `rent_percent`         | no       | decimal | `0.0` to `100.0`; empty means `5.0`     |
//!
//! ### Example
//!
//! ```csv
//! property_type,price,down_payment,interest_rate,years,rent_percent
//! House,500000,100000,5.0,20,5.0
//! Apartment,180000,30000,3.5,15,
//! ```
//!
//! The down-payment-versus-price rule is deliberately not checked here; the
//! session's validation gate reports it per submission.

use std::path::Path;
use std::str::FromStr;

use realty_core::bounds::{BoundsError, check_form_bounds};
use realty_core::{DEFAULT_ANNUAL_RENT_PERCENT, PropertyInput, PropertyType};
use rust_decimal::Decimal;
use serde::Deserialize;

// Amounts are read as text and parsed with `Decimal::from_str` so that the
// value keeps the scale it was typed with ("5.0" stays "5.0").
#[derive(Debug, Deserialize)]
struct CsvRow {
    property_type: String,
    price: String,
    down_payment: String,
    interest_rate: String,
    years: u32,
    rent_percent: Option<String>,
}

/// Errors that can occur while loading property rows.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The CSV is structurally invalid or a cell has the wrong type.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot read '{}'", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number '{value}' in column '{column}' on row {row}")]
    InvalidNumber {
        column: &'static str,
        value: String,
        row: usize,
        #[source]
        source: rust_decimal::Error,
    },

    /// `row` is 1-based; the header is row 0.
    #[error("unrecognised property type '{value}' on row {row}")]
    UnknownPropertyType { value: String, row: usize },

    #[error("row {row}: {source}")]
    OutOfRange {
        row: usize,
        #[source]
        source: BoundsError,
    },
}

fn parse_decimal(
    column: &'static str,
    value: &str,
    row: usize,
) -> Result<Decimal, InputError> {
    Decimal::from_str(value).map_err(|source| InputError::InvalidNumber {
        column,
        value: value.to_string(),
        row,
        source,
    })
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<PropertyInput, InputError> {
    let property_type =
        PropertyType::parse(&row.property_type).ok_or_else(|| InputError::UnknownPropertyType {
            value: row.property_type.clone(),
            row: row_number,
        })?;

    let annual_rent_percent = match row.rent_percent.as_deref() {
        Some(value) => parse_decimal("rent_percent", value, row_number)?,
        None => DEFAULT_ANNUAL_RENT_PERCENT,
    };
    let input = PropertyInput {
        property_type,
        price: parse_decimal("price", &row.price, row_number)?,
        down_payment: parse_decimal("down_payment", &row.down_payment, row_number)?,
        annual_interest_rate_percent: parse_decimal("interest_rate", &row.interest_rate, row_number)?,
        years: row.years,
        annual_rent_percent,
    };

    check_form_bounds(&input).map_err(|source| InputError::OutOfRange {
        row: row_number,
        source,
    })?;
    Ok(input)
}

/// Parses CSV text into property inputs, in file order.
///
/// # Errors
///
/// The first [`InputError`] encountered; nothing is returned for a file
/// with any bad row.
pub fn load_from_str(input: &str) -> Result<Vec<PropertyInput>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<PropertyInput>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
