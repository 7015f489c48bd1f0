pub mod columns;
pub mod config;
pub mod export;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod session;
pub mod view;

pub use columns::{Column, ColumnKind};
pub use config::{ColumnWidths, ConfigError, LayoutConfig, Orientation};
pub use export::write_report;
pub use pdf::PdfRenderer;
pub use session::Session;
pub use view::PortfolioView;
