//! Seam between the portfolio and document renderers.
//!
//! Renderers live in their own crate; the core only defines what a rendered
//! document looks like and how rendering fails.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::PropertyRecord;

pub const MIME_TYPE_PDF: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum RenderError {
    /// The document backend failed while producing bytes.
    #[error("document generation failed: {0}")]
    DocumentGenerationFailed(String),

    /// The layout parameters cannot produce a page that fits.
    #[error("invalid report layout: {0}")]
    InvalidLayout(String),

    /// Handing the finished document to the file system failed.
    #[error("failed to export report to '{}'", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A finished document ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// File name offered to the user, e.g. `real_estate_summary.pdf`.
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Produces a complete document from a portfolio snapshot.
///
/// Implementations must treat `records` as read-only and return either the
/// whole document or an error; no partial output.
pub trait ReportRenderer {
    fn render(
        &self,
        records: &[PropertyRecord],
    ) -> Result<ReportDocument, RenderError>;
}
