//! Runtime log record
//!
//! The instrumented program appends one of these per regex construction,
//! serialized as a single JSON object per line. The type here mirrors that
//! shape for consumers reading the log back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::Result;

/// One observed regex construction event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub pattern: String,
    pub flags: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Parse NDJSON log text. Blank lines are ignored; malformed lines are
/// skipped with a warning, since a crashed writer may leave a torn tail.
pub fn parse_log_records(text: &str) -> Vec<LogRecord> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<LogRecord>(line) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed log line {}: {}", idx + 1, e),
        }
    }
    records
}

/// Read every record from a log file written by instrumented code
pub fn read_log_records(path: impl AsRef<Path>) -> Result<Vec<LogRecord>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(parse_log_records(&text))
}
