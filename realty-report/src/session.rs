//! One user's working session.
//!
//! A [`Session`] owns its [`Portfolio`] outright. Front ends create one per
//! user interaction context and pass it by `&mut` to every handler; two
//! sessions never share records.

use realty_core::calculations::compute;
use realty_core::{
    Portfolio, PropertyInput, PropertyRecord, RenderError, ReportDocument, ReportRenderer,
    ValidationError, validate,
};
use tracing::{debug, info};

use crate::view::PortfolioView;

#[derive(Debug, Default)]
pub struct Session {
    portfolio: Portfolio,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Validates and computes `input`, then appends the result.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`]; the portfolio is left unchanged.
    pub fn add_property(
        &mut self,
        input: PropertyInput,
    ) -> Result<&PropertyRecord, ValidationError> {
        validate(&input)?;
        let record = compute(input);
        info!(
            property_type = %record.property_type(),
            net_value = %record.net_value(),
            monthly_payment = %record.monthly_payment(),
            "Property added"
        );
        Ok(self.portfolio.append(record))
    }

    /// Rows for the on-screen table.
    pub fn portfolio_view(&self) -> PortfolioView {
        PortfolioView::from_records(self.portfolio.snapshot())
    }

    /// Renders the current portfolio. Rendering only reads the snapshot.
    ///
    /// An empty portfolio is exported as a document with headers and no rows.
    pub fn export_report(
        &self,
        renderer: &dyn ReportRenderer,
    ) -> Result<ReportDocument, RenderError> {
        debug!(records = self.portfolio.len(), "Exporting report");
        renderer.render(self.portfolio.snapshot())
    }

    pub fn clear_portfolio(&mut self) {
        self.portfolio.clear();
        info!("All records cleared");
    }
}
