//! Ordered, append-only collection of computed property records.

use tracing::debug;

use crate::models::PropertyRecord;

/// The records accumulated during one session, in submission order.
///
/// Duplicates are allowed. The only mutations are [`Portfolio::append`] and
/// [`Portfolio::clear`]; readers borrow a [`Portfolio::snapshot`], which the
/// borrow checker keeps stable for as long as it is held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    records: Vec<PropertyRecord>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` after every existing entry and returns a reference to it.
    pub fn append(
        &mut self,
        record: PropertyRecord,
    ) -> &PropertyRecord {
        self.records.push(record);
        debug!(len = self.records.len(), "Appended property record");
        &self.records[self.records.len() - 1]
    }

    /// Removes every record. Clearing an empty portfolio is a no-op.
    pub fn clear(&mut self) {
        let removed = self.records.len();
        self.records.clear();
        debug!(removed, "Cleared portfolio");
    }

    pub fn snapshot(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a PropertyRecord;
    type IntoIter = std::slice::Iter<'a, PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::compute;
    use crate::models::{PropertyInput, PropertyType};

    fn record(price: Decimal) -> PropertyRecord {
        compute(PropertyInput::new(
            PropertyType::Apartment,
            price,
            dec!(10000),
            dec!(5.0),
            10,
        ))
    }

    #[test]
    fn new_portfolio_is_empty() {
        let portfolio = Portfolio::new();

        assert!(portfolio.is_empty());
        assert!(portfolio.snapshot().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut portfolio = Portfolio::new();
        for price in [dec!(300000), dec!(100000), dec!(200000)] {
            portfolio.append(record(price));
        }

        let prices: Vec<_> = portfolio.iter().map(PropertyRecord::price).collect();
        assert_eq!(prices, vec![dec!(300000), dec!(100000), dec!(200000)]);
    }

    #[test]
    fn append_allows_duplicates() {
        let mut portfolio = Portfolio::new();
        portfolio.append(record(dec!(120000)));
        portfolio.append(record(dec!(120000)));

        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.snapshot()[0], portfolio.snapshot()[1]);
    }

    #[test]
    fn append_returns_the_stored_record() {
        let mut portfolio = Portfolio::new();
        let stored = portfolio.append(record(dec!(80000))).clone();

        assert_eq!(portfolio.snapshot().last(), Some(&stored));
    }

    #[test]
    fn clear_empties_regardless_of_length() {
        let mut portfolio = Portfolio::new();
        for _ in 0..5 {
            portfolio.append(record(dec!(50000)));
        }

        portfolio.clear();

        assert!(portfolio.snapshot().is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut portfolio = Portfolio::new();

        portfolio.clear();
        portfolio.clear();

        assert_eq!(portfolio.len(), 0);
    }
}
