//! Shared data models

mod log_record;
mod span;

pub use log_record::{parse_log_records, read_log_records, LogRecord};
pub use span::SourceLocation;
