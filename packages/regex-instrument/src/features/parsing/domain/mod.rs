//! Parsing domain models

mod parsed_tree;

pub use parsed_tree::{ParsedTree, SyntaxError};
