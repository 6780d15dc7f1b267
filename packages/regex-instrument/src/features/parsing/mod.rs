//! Parsing Feature
//!
//! Responsible for turning program text into a syntax tree.
//!
//! ## Structure
//! - `domain/` - ParsedTree, SyntaxError models
//! - `ports/` - Parser trait, LanguageId
//! - `application/` - ParseFileUseCase, source loading
//! - `infrastructure/` - TreeSitterParser

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::{load_source, ParseFileUseCase};
pub use domain::{ParsedTree, SyntaxError};
pub use infrastructure::TreeSitterParser;
pub use ports::{LanguageId, Parser};
