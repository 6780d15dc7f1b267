//! Tree-sitter parser implementation
//!
//! This is where the grammar dependency lives. JavaScript is parsed with the
//! TSX grammar, which accepts plain JavaScript plus JSX.

use std::path::Path;

use tree_sitter::Parser as TSParser;

use crate::errors::{InstrumentError, Result};
use crate::features::parsing::domain::ParsedTree;
use crate::features::parsing::ports::{LanguageId, Parser};

/// Tree-sitter based parser
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterParser {
    language: LanguageId,
}

impl TreeSitterParser {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    /// Parser for a file path, honouring an explicit override
    pub fn for_path(path: impl AsRef<Path>, language: Option<LanguageId>) -> Self {
        Self::new(language.unwrap_or_else(|| LanguageId::from_path(path)))
    }

    /// Get the tree-sitter grammar
    fn grammar(&self) -> tree_sitter::Language {
        match self.language {
            LanguageId::TypeScript => tree_sitter_typescript::language_typescript(),
            LanguageId::JavaScript | LanguageId::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.grammar())
            .map_err(|e| InstrumentError::Language(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| InstrumentError::parse(file_path, 1, 0, "parser produced no tree"))?;

        Ok(ParsedTree::new(
            tree,
            source.to_string(),
            file_path.to_string(),
            self.language,
        ))
    }

    fn language(&self) -> LanguageId {
        self.language
    }
}
