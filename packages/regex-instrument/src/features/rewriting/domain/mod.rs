//! Rewriting domain models

mod rewritten_tree;

pub use rewritten_tree::{Replacement, RewrittenTree};
