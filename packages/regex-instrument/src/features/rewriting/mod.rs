//! Rewriting Feature
//!
//! Turns detected sites into byte-range replacements over the original text
//! and prints the rewritten program. Text outside replaced ranges is copied
//! verbatim, so comments, formatting and line structure survive.
//!
//! ## Structure
//! - `domain/` - Replacement, RewrittenTree
//! - `application/` - Rewriter (renders nested sites innermost-first)
//! - `infrastructure/` - printer

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::Rewriter;
pub use domain::{Replacement, RewrittenTree};
pub use infrastructure::print_source;
