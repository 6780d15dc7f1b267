//! Rewriting use cases

mod rewriter;

pub use rewriter::Rewriter;
