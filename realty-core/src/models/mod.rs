mod property_input;
mod property_record;
mod property_type;

pub use property_input::{DEFAULT_ANNUAL_RENT_PERCENT, PropertyInput};
pub use property_record::PropertyRecord;
pub use property_type::PropertyType;
