//! PDF backend for the printed report.
//!
//! Draws a precomputed [`ReportLayout`] with the builtin Helvetica fonts, so
//! no font files need to ship with the binary.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};
use realty_core::{MIME_TYPE_PDF, PropertyRecord, RenderError, ReportDocument, ReportRenderer};
use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::layout::{CellBox, PageLayout, ReportLayout, TextRun, layout_report};

const LAYER_NAME: &str = "Report";
/// Header row background (light blue).
const HEADER_FILL: (f32, f32, f32) = (200.0 / 255.0, 230.0 / 255.0, 1.0);
const BORDER_THICKNESS_PT: f32 = 0.5;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn black() -> Color {
    rgb((0.0, 0.0, 0.0))
}

fn generation_failed(err: printpdf::Error) -> RenderError {
    RenderError::DocumentGenerationFailed(err.to_string())
}

/// Renders a portfolio as a paginated PDF table.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    config: LayoutConfig,
}

impl PdfRenderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Draws an already computed layout and returns the finished PDF.
    ///
    /// # Errors
    ///
    /// [`RenderError::DocumentGenerationFailed`] if the backend cannot embed
    /// a font or serialise the document.
    pub fn render_layout(
        &self,
        layout: &ReportLayout,
    ) -> Result<Vec<u8>, RenderError> {
        let width = Mm(layout.page_width);
        let height = Mm(layout.page_height);
        let (doc, first_page, first_layer) =
            PdfDocument::new(self.config.title.clone(), width, height, LAYER_NAME);

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(generation_failed)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(generation_failed)?,
        };

        for page in &layout.pages {
            let layer = if page.number == 1 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) = doc.add_page(width, height, LAYER_NAME);
                doc.get_page(page_idx).get_layer(layer_idx)
            };
            draw_page(&layer, page, &fonts);
        }

        let bytes = doc.save_to_bytes().map_err(generation_failed)?;
        debug!(pages = layout.pages.len(), bytes = bytes.len(), "Serialised PDF");
        Ok(bytes)
    }
}

impl ReportRenderer for PdfRenderer {
    fn render(
        &self,
        records: &[PropertyRecord],
    ) -> Result<ReportDocument, RenderError> {
        let layout = layout_report(records, &self.config)?;
        let bytes = self.render_layout(&layout)?;

        info!(
            records = records.len(),
            pages = layout.pages.len(),
            file_name = %self.config.file_name(),
            "Rendered portfolio report"
        );

        Ok(ReportDocument {
            file_name: self.config.file_name(),
            mime_type: MIME_TYPE_PDF,
            bytes,
        })
    }
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &PageLayout,
    fonts: &Fonts,
) {
    layer.set_outline_color(black());
    layer.set_outline_thickness(BORDER_THICKNESS_PT);

    draw_text(layer, &page.title, fonts);
    for cell in page.header.iter().chain(page.rows.iter().flatten()) {
        draw_cell(layer, cell, fonts);
    }
    if let Some(footer) = &page.footer {
        draw_text(layer, footer, fonts);
    }
}

fn draw_cell(
    layer: &PdfLayerReference,
    cell: &CellBox,
    fonts: &Fonts,
) {
    let mode = if cell.filled {
        layer.set_fill_color(rgb(HEADER_FILL));
        PaintMode::FillStroke
    } else {
        PaintMode::Stroke
    };
    let border = Rect::new(
        Mm(cell.x),
        Mm(cell.y),
        Mm(cell.x + cell.width),
        Mm(cell.y + cell.height),
    )
    .with_mode(mode);
    layer.add_rect(border);

    draw_text(layer, &cell.text, fonts);
}

fn draw_text(
    layer: &PdfLayerReference,
    run: &TextRun,
    fonts: &Fonts,
) {
    if run.text.is_empty() {
        return;
    }
    let font = if run.bold { &fonts.bold } else { &fonts.regular };
    layer.set_fill_color(black());
    layer.use_text(run.text.as_str(), run.font_size, Mm(run.x), Mm(run.y), font);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use realty_core::calculations::compute;
    use realty_core::{PropertyInput, PropertyType};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::ColumnWidths;

    fn sample() -> Vec<PropertyRecord> {
        vec![compute(PropertyInput::new(
            PropertyType::House,
            dec!(500000),
            dec!(100000),
            dec!(5.0),
            20,
        ))]
    }

    #[test]
    fn render_produces_pdf_document() {
        let document = PdfRenderer::default().render(&sample()).unwrap();

        assert_eq!(document.file_name, "real_estate_summary.pdf");
        assert_eq!(document.mime_type, "application/pdf");
        assert!(document.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_uses_configured_report_name() {
        let renderer = PdfRenderer::new(LayoutConfig {
            report_name: "q3_portfolio".to_string(),
            ..LayoutConfig::default()
        });

        let document = renderer.render(&sample()).unwrap();

        assert_eq!(document.file_name, "q3_portfolio.pdf");
    }

    #[test]
    fn render_surfaces_layout_errors() {
        let renderer = PdfRenderer::new(LayoutConfig {
            column_widths: ColumnWidths::Fixed(vec![10.0]),
            ..LayoutConfig::default()
        });

        let result = renderer.render(&sample());

        assert!(matches!(result, Err(RenderError::InvalidLayout(_))));
    }
}
