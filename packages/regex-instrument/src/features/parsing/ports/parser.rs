//! Parser port

use super::LanguageId;
use crate::errors::Result;
use crate::features::parsing::domain::ParsedTree;

/// Parser trait - abstracts the syntax front end
pub trait Parser {
    /// Parse source text. Syntax errors are recorded on the tree, not
    /// returned; only a failure to produce any tree is an `Err`.
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree>;

    /// Language this parser handles
    fn language(&self) -> LanguageId;
}
