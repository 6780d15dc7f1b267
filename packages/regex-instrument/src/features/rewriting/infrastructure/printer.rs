//! Source printer

use crate::features::rewriting::domain::RewrittenTree;

/// Apply replacements to `source`
///
/// With no replacements the output is byte-identical to the input.
pub fn print_source(source: &str, tree: &RewrittenTree) -> String {
    if tree.is_unchanged() {
        return source.to_string();
    }
    debug_assert!(tree.is_well_formed(), "replacements overlap or are out of order");

    let added: usize = tree.replacements.iter().map(|r| r.text.len()).sum();
    let mut out = String::with_capacity(source.len() + added);
    let mut cursor = 0;
    for replacement in &tree.replacements {
        out.push_str(source.get(cursor..replacement.range.start).unwrap_or(""));
        out.push_str(&replacement.text);
        cursor = replacement.range.end;
    }
    out.push_str(source.get(cursor..).unwrap_or(""));
    out
}
