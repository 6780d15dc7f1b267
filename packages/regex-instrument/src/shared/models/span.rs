//! Source location types
//!
//! Lines are 1-based. Columns are 0-based and counted in UTF-16 code units,
//! the unit JavaScript engines and tooling report columns in.

use serde::{Deserialize, Serialize};

/// Static location of a construction site, as embedded in a LogRecord
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new("lib/util.js", 4, 12);
        assert_eq!(loc.to_string(), "lib/util.js:4:12");
    }

    #[test]
    fn test_location_serializes_flat() {
        let loc = SourceLocation::new("a.js", 2, 5);
        assert_eq!(
            serde_json::to_string(&loc).unwrap(),
            r#"{"file":"a.js","line":2,"column":5}"#
        );
    }
}
