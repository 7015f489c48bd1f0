//! Page layout for the printed report.
//!
//! Layout is computed up front as plain geometry (millimetres, origin at the
//! bottom-left corner like PDF) so that pagination and column fitting can be
//! checked without producing a document. The PDF backend only draws what
//! this module decides.
//!
//! Every page carries, top to bottom: the centered title, a filled header
//! row of column labels, as many bordered data rows as fit above the footer
//! band, and an optional centered "Page n of m" footer.
//!
//! Only header labels and the title are ever shortened. Data cells always
//! print their full formatted value; a column whose widest value does not
//! fit at the configured font size gets a smaller font for its data cells.

use realty_core::{PropertyRecord, RenderError};
use tracing::{debug, warn};

use crate::columns::Column;
use crate::config::{ColumnWidths, LayoutConfig};
use crate::format::truncate_chars;
pub use crate::metrics::{PT_TO_MM, text_width_mm};
use crate::metrics::fit_prefix;

/// Horizontal space kept free on each side of a cell's text.
const CELL_PADDING_MM: f32 = 1.0;
/// Smallest font a data column may shrink to before the layout is rejected.
pub const MIN_FONT_SIZE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text positioned by its baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub bold: bool,
}

/// A bordered table cell; `x`/`y` is the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub filled: bool,
    pub text: TextRun,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// One-based page number.
    pub number: usize,
    pub title: TextRun,
    pub header: Vec<CellBox>,
    pub rows: Vec<Vec<CellBox>>,
    pub footer: Option<TextRun>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub column_widths: Vec<f32>,
    pub pages: Vec<PageLayout>,
}

impl ReportLayout {
    /// Total number of data rows across all pages.
    pub fn data_row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }
}

/// Room left for text inside a cell of `width_mm`.
fn text_room_mm(width_mm: f32) -> f32 {
    (width_mm - 2.0 * CELL_PADDING_MM).max(0.0)
}

/// Font size for each column's data cells.
///
/// A column keeps the configured size unless its widest formatted value
/// would overflow the cell, in which case the whole column is set in the
/// largest size that fits.
///
/// # Errors
///
/// [`RenderError::InvalidLayout`] when a value does not fit even at
/// [`MIN_FONT_SIZE`].
pub fn column_font_sizes(
    records: &[PropertyRecord],
    widths: &[f32],
    config: &LayoutConfig,
) -> Result<Vec<f32>, RenderError> {
    Column::ALL
        .iter()
        .zip(widths)
        .map(|(column, &width)| {
            let widest = records
                .iter()
                .map(|record| text_width_mm(&column.format(record), 1.0, false))
                .fold(0.0_f32, f32::max);
            if widest <= 0.0 {
                return Ok(config.font_size);
            }

            let fitting = text_room_mm(width) / widest;
            if fitting >= config.font_size {
                return Ok(config.font_size);
            }
            if fitting < MIN_FONT_SIZE {
                return Err(RenderError::InvalidLayout(format!(
                    "column '{}' is {width:.1} mm wide, too narrow for its values at {MIN_FONT_SIZE} pt",
                    column.label()
                )));
            }

            debug!(
                column = column.label(),
                width_mm = width,
                font_size = fitting,
                "Shrinking column font to fit its values"
            );
            Ok(fitting)
        })
        .collect()
}

/// Resolves the configured width policy into one width per column.
///
/// # Errors
///
/// [`RenderError::InvalidLayout`] when fixed widths do not match the column
/// count or contain a non-positive value.
pub fn resolve_column_widths(config: &LayoutConfig) -> Result<Vec<f32>, RenderError> {
    let usable = config.usable_width_mm();
    let count = Column::ALL.len();

    match &config.column_widths {
        ColumnWidths::Uniform => Ok(vec![usable / count as f32; count]),
        ColumnWidths::Fixed(widths) => {
            if widths.len() != count {
                return Err(RenderError::InvalidLayout(format!(
                    "expected {count} column widths, got {}",
                    widths.len()
                )));
            }
            if let Some(bad) = widths.iter().find(|w| !w.is_finite() || **w <= 0.0) {
                return Err(RenderError::InvalidLayout(format!(
                    "column widths must be positive, got {bad}"
                )));
            }

            let total: f32 = widths.iter().sum();
            if total <= usable {
                return Ok(widths.clone());
            }

            let scale = usable / total;
            warn!(
                total_mm = total,
                usable_mm = usable,
                scale,
                "Fixed column widths exceed the printable width; scaling down"
            );
            Ok(widths.iter().map(|w| w * scale).collect())
        }
    }
}

/// Vertical bands of a page, derived once from the config.
struct PageBands {
    title_baseline: f32,
    table_top: f32,
    footer_baseline: Option<f32>,
    rows_per_page: usize,
}

fn page_bands(config: &LayoutConfig) -> Result<PageBands, RenderError> {
    let (_, page_height) = config.page_size_mm();
    let top = page_height - config.margin;
    let title_mm = config.title_font_size * PT_TO_MM;
    let font_mm = config.font_size * PT_TO_MM;

    let title_band = title_mm * 2.0;
    let footer_band = if config.show_page_numbers {
        config.row_height
    } else {
        0.0
    };

    let table_top = top - title_band;
    let bottom = config.margin + footer_band;
    // The header row always sits directly under the title band.
    let room_for_rows = table_top - config.row_height - bottom;
    let rows_per_page = (room_for_rows / config.row_height).floor();
    if rows_per_page < 1.0 {
        return Err(RenderError::InvalidLayout(format!(
            "page height leaves no room for data rows (margin {} mm, row height {} mm)",
            config.margin, config.row_height
        )));
    }

    Ok(PageBands {
        title_baseline: top - title_mm,
        table_top,
        footer_baseline: config
            .show_page_numbers
            .then(|| config.margin + (footer_band - font_mm) / 2.0),
        rows_per_page: rows_per_page as usize,
    })
}

fn check_config(config: &LayoutConfig) -> Result<(), RenderError> {
    let positive = |name: &str, value: f32| {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(RenderError::InvalidLayout(format!(
                "{name} must be positive, got {value}"
            )))
        }
    };
    positive("font_size", config.font_size)?;
    positive("title_font_size", config.title_font_size)?;
    positive("row_height", config.row_height)?;

    if !config.margin.is_finite() || config.margin < 0.0 {
        return Err(RenderError::InvalidLayout(format!(
            "margin must be non-negative, got {}",
            config.margin
        )));
    }
    if config.usable_width_mm() <= 0.0 {
        return Err(RenderError::InvalidLayout(format!(
            "margin {} mm leaves no printable width",
            config.margin
        )));
    }
    Ok(())
}

/// Bottom-left corner and width of one cell.
#[derive(Clone, Copy)]
struct Slot {
    x: f32,
    y: f32,
    width: f32,
}

/// Positions `text` inside a cell. The caller guarantees that it fits.
fn place_in_cell(
    text: String,
    Slot { x, y, width }: Slot,
    align: Align,
    bold: bool,
    font_size: f32,
    config: &LayoutConfig,
) -> CellBox {
    let text_width = text_width_mm(&text, font_size, bold);
    let text_x = match align {
        Align::Left => x + CELL_PADDING_MM,
        Align::Center => x + (width - text_width) / 2.0,
        Align::Right => x + width - CELL_PADDING_MM - text_width,
    };
    let font_mm = font_size * PT_TO_MM;
    let text_y = y + (config.row_height - font_mm) / 2.0 + font_mm * 0.2;

    CellBox {
        x,
        y,
        width,
        height: config.row_height,
        filled: bold,
        text: TextRun {
            text,
            x: text_x,
            y: text_y,
            font_size,
            bold,
        },
    }
}

fn header_row(
    lefts: &[f32],
    widths: &[f32],
    y: f32,
    config: &LayoutConfig,
) -> Vec<CellBox> {
    Column::ALL
        .iter()
        .zip(lefts.iter().zip(widths))
        .map(|(column, (&x, &width))| {
            let label = truncate_chars(column.label(), config.label_max_chars);
            let label = fit_prefix(&label, text_room_mm(width), config.font_size, true);
            place_in_cell(
                label.to_string(),
                Slot { x, y, width },
                Align::Center,
                true,
                config.font_size,
                config,
            )
        })
        .collect()
}

fn data_row(
    record: &PropertyRecord,
    lefts: &[f32],
    widths: &[f32],
    font_sizes: &[f32],
    y: f32,
    config: &LayoutConfig,
) -> Vec<CellBox> {
    Column::ALL
        .iter()
        .zip(lefts.iter().zip(widths))
        .zip(font_sizes)
        .map(|((column, (&x, &width)), &font_size)| {
            let align = if column.kind().is_right_aligned() {
                Align::Right
            } else {
                Align::Left
            };
            place_in_cell(
                column.format(record),
                Slot { x, y, width },
                align,
                false,
                font_size,
                config,
            )
        })
        .collect()
}

/// Lays out `records` over as many pages as needed.
///
/// An empty slice produces a single page with the title, header row and
/// footer and no data rows.
///
/// # Errors
///
/// [`RenderError::InvalidLayout`] when the config cannot produce a page
/// with at least one data row, when the column widths are invalid, or when
/// a column is too narrow for its values at [`MIN_FONT_SIZE`].
pub fn layout_report(
    records: &[PropertyRecord],
    config: &LayoutConfig,
) -> Result<ReportLayout, RenderError> {
    check_config(config)?;
    let widths = resolve_column_widths(config)?;
    let bands = page_bands(config)?;
    let font_sizes = column_font_sizes(records, &widths, config)?;
    let (page_width, page_height) = config.page_size_mm();

    let lefts: Vec<f32> = widths
        .iter()
        .scan(config.margin, |x, width| {
            let left = *x;
            *x += width;
            Some(left)
        })
        .collect();

    let title_font = config.title_font_size;
    let title_text =
        fit_prefix(&config.title, config.usable_width_mm(), title_font, true).to_string();
    if title_text.len() < config.title.len() {
        warn!(title = %config.title, "Report title shortened to the page width");
    }
    let title_x = (page_width - text_width_mm(&title_text, title_font, true)) / 2.0;

    let chunks: Vec<&[PropertyRecord]> = if records.is_empty() {
        vec![records]
    } else {
        records.chunks(bands.rows_per_page).collect()
    };
    let page_count = chunks.len();

    let pages = chunks
        .into_iter()
        .enumerate()
        .map(|(idx, chunk)| {
            let number = idx + 1;
            let header_y = bands.table_top - config.row_height;
            let rows = chunk
                .iter()
                .enumerate()
                .map(|(row_idx, record)| {
                    let y = header_y - config.row_height * (row_idx as f32 + 1.0);
                    data_row(record, &lefts, &widths, &font_sizes, y, config)
                })
                .collect();

            let footer = bands.footer_baseline.map(|y| {
                let text = format!("Page {number} of {page_count}");
                let x = (page_width - text_width_mm(&text, config.font_size, false)) / 2.0;
                TextRun {
                    text,
                    x,
                    y,
                    font_size: config.font_size,
                    bold: false,
                }
            });

            PageLayout {
                number,
                title: TextRun {
                    text: title_text.clone(),
                    x: title_x,
                    y: bands.title_baseline,
                    font_size: title_font,
                    bold: true,
                },
                header: header_row(&lefts, &widths, header_y, config),
                rows,
                footer,
            }
        })
        .collect();

    debug!(
        records = records.len(),
        pages = page_count,
        rows_per_page = bands.rows_per_page,
        "Laid out report"
    );

    Ok(ReportLayout {
        page_width,
        page_height,
        column_widths: widths,
        pages,
    })
}
