//! Parsing infrastructure (tree-sitter adapter)

mod tree_sitter_parser;

pub use tree_sitter_parser::TreeSitterParser;
