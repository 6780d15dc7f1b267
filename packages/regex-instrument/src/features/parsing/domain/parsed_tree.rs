//! Parsed tree representation
//!
//! Owns the tree-sitter tree together with the text it was parsed from, so
//! byte ranges of nodes can always be resolved back to source.

use tree_sitter::{Node, Tree};

use crate::errors::{InstrumentError, Result};
use crate::features::parsing::ports::LanguageId;
use crate::shared::utils::tree_sitter::{extract_node_text, utf16_column};

/// Longest snippet of offending text quoted in an error message
const SNIPPET_LIMIT: usize = 24;

/// Parsed syntax tree
#[derive(Debug, Clone)]
pub struct ParsedTree {
    tree: Tree,

    /// Source code
    pub source: String,

    /// File path (for error messages and log records)
    pub file_path: String,

    /// Language
    pub language: LanguageId,

    /// Syntax errors, in source order
    pub errors: Vec<SyntaxError>,
}

/// Syntax error location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl ParsedTree {
    pub fn new(tree: Tree, source: String, file_path: String, language: LanguageId) -> Self {
        let mut errors = Vec::new();
        collect_errors(tree.root_node(), &source, &mut errors);
        Self {
            tree,
            source,
            file_path,
            language,
            errors,
        }
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Fail with the first syntax error, if any
    pub fn ensure_valid(&self) -> Result<()> {
        match self.errors.first() {
            Some(err) => Err(InstrumentError::parse(
                self.file_path.clone(),
                err.line,
                err.column,
                err.message.clone(),
            )),
            None => Ok(()),
        }
    }
}

/// Collect ERROR/MISSING nodes; does not descend into an ERROR node
fn collect_errors(node: Node, source: &str, errors: &mut Vec<SyntaxError>) {
    if node.is_error() || node.is_missing() {
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let text = extract_node_text(node, source);
            let snippet: String = text.chars().take(SNIPPET_LIMIT).collect();
            format!("unexpected syntax `{}`", snippet.trim())
        };
        errors.push(SyntaxError {
            message,
            line: node.start_position().row as u32 + 1,
            column: utf16_column(source, node.start_byte()),
        });
        return;
    }
    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, source, errors);
    }
}
