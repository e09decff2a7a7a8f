mod field_error;
mod payload_reader;

pub use field_error::{FieldError, ValidationErrors};
pub use payload_reader::{parse_calendar_date, parse_instant, ListRule, PayloadReader, TextRule};
