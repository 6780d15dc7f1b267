//! Shared utilities

pub mod js_string;
pub mod scope_stack;
pub mod tree_sitter;

pub use js_string::{cook_string_literal, cook_template_literal, to_js_string_literal};
pub use scope_stack::{Binding, ScopeKind, ScopeStack};
