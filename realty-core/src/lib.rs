pub mod bounds;
pub mod calculations;
pub mod models;
pub mod portfolio;
pub mod report;
pub mod validation;

pub use models::*;
pub use portfolio::Portfolio;
pub use report::{MIME_TYPE_PDF, RenderError, ReportDocument, ReportRenderer};
pub use validation::{ValidationError, validate};
