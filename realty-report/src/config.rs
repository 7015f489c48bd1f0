//! Page layout parameters for the printed report.
//!
//! A single [`LayoutConfig`] drives the renderer; portrait and landscape,
//! uniform and fixed-width tables are all variations of the same values.
//! The config can be loaded from TOML, where every key is optional:
//!
//! ```toml
//! title = "Real Estate Purchase Summary"
//! report_name = "real_estate_summary"
//! orientation = "landscape"
//! column_widths = { fixed = [24, 28, 28, 28, 18, 14, 28, 30, 25, 16, 26] }
//! font_size = 8.0
//! title_font_size = 14.0
//! row_height = 7.0
//! margin = 10.0
//! label_max_chars = 16
//! show_page_numbers = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::columns::Column;

/// A4 short edge in millimetres.
const A4_SHORT_MM: f32 = 210.0;
/// A4 long edge in millimetres.
const A4_LONG_MM: f32 = 297.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read layout config '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    /// Page width and height in millimetres (A4).
    pub fn page_size_mm(self) -> (f32, f32) {
        match self {
            Self::Portrait => (A4_SHORT_MM, A4_LONG_MM),
            Self::Landscape => (A4_LONG_MM, A4_SHORT_MM),
        }
    }
}

/// How the usable page width is divided between columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidths {
    /// Every column gets usable width / column count.
    Uniform,
    /// One width in millimetres per column, in display order. Scaled down
    /// proportionally when the sum exceeds the usable width.
    Fixed(Vec<f32>),
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::Fixed(Column::ALL.iter().map(|c| c.default_width_mm()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Centered heading repeated on every page.
    pub title: String,
    /// Download file name without the `.pdf` extension.
    pub report_name: String,
    pub orientation: Orientation,
    pub column_widths: ColumnWidths,
    /// Table text size in points.
    pub font_size: f32,
    /// Heading size in points.
    pub title_font_size: f32,
    /// Height of every table row in millimetres.
    pub row_height: f32,
    /// Margin on all four sides in millimetres.
    pub margin: f32,
    /// Column labels longer than this are cut, not wrapped.
    pub label_max_chars: usize,
    pub show_page_numbers: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: "Real Estate Purchase Summary".to_string(),
            report_name: "real_estate_summary".to_string(),
            orientation: Orientation::default(),
            column_widths: ColumnWidths::default(),
            font_size: 8.0,
            title_font_size: 14.0,
            row_height: 7.0,
            margin: 10.0,
            label_max_chars: 16,
            show_page_numbers: true,
        }
    }
}

impl LayoutConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.report_name)
    }

    pub fn page_size_mm(&self) -> (f32, f32) {
        self.orientation.page_size_mm()
    }

    pub fn usable_width_mm(&self) -> f32 {
        self.page_size_mm().0 - 2.0 * self.margin
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = LayoutConfig::from_toml_str("").unwrap();

        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn toml_overrides_selected_keys() {
        let config = LayoutConfig::from_toml_str(
            r#"
            title = "Portfolio"
            orientation = "portrait"
            column_widths = "uniform"
            label_max_chars = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.column_widths, ColumnWidths::Uniform);
        assert_eq!(config.label_max_chars, 10);
        assert_eq!(config.font_size, 8.0);
    }

    #[test]
    fn toml_accepts_fixed_widths() {
        let config =
            LayoutConfig::from_toml_str("column_widths = { fixed = [10.0, 20.0, 30.0] }").unwrap();

        assert_eq!(config.column_widths, ColumnWidths::Fixed(vec![10.0, 20.0, 30.0]));
    }

    #[test]
    fn toml_rejects_unknown_orientation() {
        let result = LayoutConfig::from_toml_str(r#"orientation = "diagonal""#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = LayoutConfig::load(Path::new("/definitely/not/here.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn page_sizes_follow_orientation() {
        assert_eq!(Orientation::Portrait.page_size_mm(), (210.0, 297.0));
        assert_eq!(Orientation::Landscape.page_size_mm(), (297.0, 210.0));
    }

    #[test]
    fn file_name_appends_pdf_extension() {
        assert_eq!(LayoutConfig::default().file_name(), "real_estate_summary.pdf");
    }
}
