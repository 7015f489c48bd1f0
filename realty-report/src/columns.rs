//! The fixed column table shared by the screen view and the printed report.
//!
//! | # | Label             | Kind      | Default width (mm) |
//! |---|-------------------|-----------|--------------------|
//! | 1 | Property Type     | text      | 24                 |
//! | 2 | Price             | amount    | 28                 |
//! | 3 | Down Payment      | amount    | 28                 |
//! | 4 | Net Value         | amount    | 28                 |
//! | 5 | Interest Rate (%) | as entered| 18                 |
//! | 6 | Years             | as entered| 14                 |
//! | 7 | Total Interest    | amount    | 28                 |
//! | 8 | Total w/ Interest | amount    | 30                 |
//! | 9 | Monthly Payment   | amount    | 25                 |
//! | 10| Rent (%)          | as entered| 16                 |
//! | 11| Annual Rent       | amount    | 26                 |
//!
//! The default widths sum to 265 mm, which fits a landscape A4 page with
//! 10 mm margins.

use realty_core::PropertyRecord;

use crate::format::format_amount;

/// How a column's values are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text, left aligned.
    Text,
    /// Money: thousands separators, two decimals, right aligned.
    Amount,
    /// Numeric input shown exactly as entered, right aligned.
    AsEntered,
}

impl ColumnKind {
    pub fn is_right_aligned(self) -> bool {
        !matches!(self, Self::Text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    PropertyType,
    Price,
    DownPayment,
    NetValue,
    InterestRate,
    Years,
    TotalInterest,
    TotalWithInterest,
    MonthlyPayment,
    RentPercent,
    AnnualRent,
}

impl Column {
    /// Every column in display order.
    pub const ALL: [Column; 11] = [
        Column::PropertyType,
        Column::Price,
        Column::DownPayment,
        Column::NetValue,
        Column::InterestRate,
        Column::Years,
        Column::TotalInterest,
        Column::TotalWithInterest,
        Column::MonthlyPayment,
        Column::RentPercent,
        Column::AnnualRent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PropertyType => "Property Type",
            Self::Price => "Price",
            Self::DownPayment => "Down Payment",
            Self::NetValue => "Net Value",
            Self::InterestRate => "Interest Rate (%)",
            Self::Years => "Years",
            Self::TotalInterest => "Total Interest",
            Self::TotalWithInterest => "Total w/ Interest",
            Self::MonthlyPayment => "Monthly Payment",
            Self::RentPercent => "Rent (%)",
            Self::AnnualRent => "Annual Rent",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Self::PropertyType => ColumnKind::Text,
            Self::InterestRate | Self::Years | Self::RentPercent => ColumnKind::AsEntered,
            _ => ColumnKind::Amount,
        }
    }

    /// Width in millimetres tuned for landscape A4.
    pub fn default_width_mm(self) -> f32 {
        match self {
            Self::PropertyType => 24.0,
            Self::InterestRate => 18.0,
            Self::Years => 14.0,
            Self::RentPercent => 16.0,
            Self::MonthlyPayment => 25.0,
            Self::AnnualRent => 26.0,
            Self::TotalWithInterest => 30.0,
            Self::Price | Self::DownPayment | Self::NetValue | Self::TotalInterest => 28.0,
        }
    }

    /// Formats this column's value for `record`.
    pub fn format(
        self,
        record: &PropertyRecord,
    ) -> String {
        match self {
            Self::PropertyType => record.property_type().to_string(),
            Self::Price => format_amount(record.price()),
            Self::DownPayment => format_amount(record.down_payment()),
            Self::NetValue => format_amount(record.net_value()),
            Self::InterestRate => record.annual_interest_rate_percent().to_string(),
            Self::Years => record.years().to_string(),
            Self::TotalInterest => format_amount(record.total_interest()),
            Self::TotalWithInterest => format_amount(record.total_with_interest()),
            Self::MonthlyPayment => format_amount(record.monthly_payment()),
            Self::RentPercent => record.annual_rent_percent().to_string(),
            Self::AnnualRent => format_amount(record.annual_rent()),
        }
    }
}

/// Formats one record as a row of cells in [`Column::ALL`] order.
pub fn format_row(record: &PropertyRecord) -> Vec<String> {
    Column::ALL.iter().map(|column| column.format(record)).collect()
}
