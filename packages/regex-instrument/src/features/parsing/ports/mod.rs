//! Parsing ports

mod language;
mod parser;

pub use language::LanguageId;
pub use parser::Parser;
