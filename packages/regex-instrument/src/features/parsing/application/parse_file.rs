//! Parse file use case

use std::path::Path;

use tracing::debug;

use crate::errors::{InstrumentError, Result};
use crate::features::parsing::domain::ParsedTree;
use crate::features::parsing::ports::Parser;

/// Read a whole source file as UTF-8 text
pub fn load_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| InstrumentError::source_read(path, e))
}

/// Parse file use case
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Parse and reject trees with syntax errors
    pub fn execute(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let tree = self.execute_lenient(source, file_path)?;
        tree.ensure_valid()?;
        Ok(tree)
    }

    /// Parse, keeping syntax errors on the tree
    pub fn execute_lenient(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let tree = self.parser.parse(source, file_path)?;
        debug!(
            "Parsed {} as {} ({} syntax errors)",
            file_path,
            tree.language,
            tree.errors.len()
        );
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{LanguageId, TreeSitterParser};

    #[test]
    fn test_parse_file_use_case() {
        let use_case = ParseFileUseCase::new(TreeSitterParser::new(LanguageId::JavaScript));
        let result = use_case.execute("var re = /x/;", "test.js");
        assert!(result.is_ok());
    }

    #[test]
    fn test_strict_rejects_syntax_errors() {
        let use_case = ParseFileUseCase::new(TreeSitterParser::new(LanguageId::JavaScript));
        assert!(matches!(
            use_case.execute("var = = ;", "bad.js"),
            Err(InstrumentError::Parse { .. })
        ));
        assert!(use_case.execute_lenient("var = = ;", "bad.js").is_ok());
    }

    #[test]
    fn test_load_missing_source() {
        let err = load_source("/definitely/not/here.js").unwrap_err();
        assert!(matches!(err, InstrumentError::SourceRead { .. }));
    }
}
