//! On-screen table of the portfolio.

use std::fmt;

use realty_core::PropertyRecord;

use crate::columns::{Column, format_row};

/// Display rows for every record, in insertion order.
///
/// Labels are never truncated here; only the printed report has to fit a
/// page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    pub labels: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl PortfolioView {
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        Self {
            labels: Column::ALL.iter().map(|c| c.label()).collect(),
            rows: records.iter().map(format_row).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                self.rows
                    .iter()
                    .map(|row| row[idx].chars().count())
                    .chain(std::iter::once(label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for PortfolioView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No properties added yet.");
        }

        let widths = self.column_widths();
        let header: Vec<String> = self
            .labels
            .iter()
            .zip(&widths)
            .map(|(label, width)| format!("{label:<width$}"))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .zip(Column::ALL)
                .map(|((cell, width), column)| {
                    if column.kind().is_right_aligned() {
                        format!("{cell:>width$}")
                    } else {
                        format!("{cell:<width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use realty_core::calculations::compute;
    use realty_core::{PropertyInput, PropertyType};
    use rust_decimal_macros::dec;

    use super::*;

    fn records() -> Vec<PropertyRecord> {
        vec![
            compute(PropertyInput::new(
                PropertyType::House,
                dec!(500000),
                dec!(100000),
                dec!(5.0),
                20,
            )),
            compute(PropertyInput::new(
                PropertyType::Villa,
                dec!(200000),
                dec!(200000),
                dec!(3.2),
                5,
            )),
        ]
    }

    #[test]
    fn view_has_one_row_per_record_in_order() {
        let view = PortfolioView::from_records(&records());

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0][0], "House");
        assert_eq!(view.rows[1][0], "Villa");
        assert_eq!(view.labels.len(), Column::ALL.len());
    }

    #[test]
    fn view_of_empty_portfolio_says_so() {
        let view = PortfolioView::from_records(&[]);

        assert!(view.is_empty());
        assert_eq!(view.to_string(), "No properties added yet.\n");
    }

    #[test]
    fn display_right_aligns_amounts_under_labels() {
        let rendered = PortfolioView::from_records(&records()).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Property Type | Price"));
        // "Price" header is padded to the width of "500,000.00".
        assert!(lines[2].starts_with("House         | 500,000.00 |"));
        assert!(lines[3].starts_with("Villa         | 200,000.00 |"));
        assert!(lines[3].ends_with("0.00"));
    }
}
