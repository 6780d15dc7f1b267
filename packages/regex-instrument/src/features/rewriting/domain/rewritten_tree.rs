//! Rewritten tree
//!
//! The rewritten program is represented as the original text plus an ordered
//! list of disjoint replacements. Nested sites are already folded into the
//! text of their enclosing replacement.

use std::ops::Range;

/// Replace `range` of the original text with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub text: String,
    /// Outermost site this replacement stands for
    pub site_id: usize,
}

/// Result of rewriting one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewrittenTree {
    /// Sorted by start offset, non-overlapping
    pub replacements: Vec<Replacement>,
    /// Sites rendered, nested ones included
    pub rewritten_sites: usize,
}

impl RewrittenTree {
    pub fn is_unchanged(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Replacements are ordered and disjoint
    pub fn is_well_formed(&self) -> bool {
        self.replacements
            .windows(2)
            .all(|pair| pair[0].range.end <= pair[1].range.start)
    }
}
