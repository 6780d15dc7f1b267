//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter nodes, shared by the
//! detector and the parser adapter.

use tree_sitter::Node;

use crate::shared::models::SourceLocation;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Whether any direct child (named or anonymous) has the given kind
#[inline]
pub fn has_child_kind(node: Node, kind: &str) -> bool {
    find_child_by_kind(node, kind).is_some()
}

/// Named children, skipping extras (comments)
pub fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    children
}

/// Node kinds that open a new `var` scope
pub fn is_function_like(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "generator_function_declaration"
            | "function"
            | "function_expression"
            | "generator_function"
            | "arrow_function"
            | "method_definition"
            | "class_static_block"
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'src>(node: Node, source: &'src str) -> &'src str {
    source.get(node.byte_range()).unwrap_or("")
}

// ═══════════════════════════════════════════════════════════════════════════
// Position Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Column of `byte_offset` in UTF-16 code units from the start of its line
pub fn utf16_column(source: &str, byte_offset: usize) -> u32 {
    let prefix = source.get(..byte_offset).unwrap_or(source);
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    prefix[line_start..].encode_utf16().count() as u32
}

/// Static location of a node's first character
pub fn node_location(node: Node, source: &str, file: &str) -> SourceLocation {
    SourceLocation::new(
        file,
        node.start_position().row as u32 + 1,
        utf16_column(source, node.start_byte()),
    )
}
