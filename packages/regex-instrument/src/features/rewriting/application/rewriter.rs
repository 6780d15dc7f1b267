//! Site rewriter
//!
//! Sites arrive in pre-order, so the sites nested inside a site follow it
//! contiguously. Each site is rendered after its nested sites, and the
//! rendered inner text becomes part of the outer fragment.

use std::ops::Range;

use tracing::trace;

use crate::features::instrumentation::{FragmentShape, InstrumentationFragment, Synthesizer};
use crate::features::rewriting::domain::{Replacement, RewrittenTree};
use crate::features::site_detection::{ConstructionForm, RegexSite};

/// Produces replacements for detected sites
pub struct Rewriter {
    synthesizer: Synthesizer,
}

/// Rendering state over one file
struct RenderPass<'a> {
    source: &'a str,
    sites: &'a [RegexSite],
    synthesizer: &'a Synthesizer,
    rendered: usize,
}

impl Rewriter {
    pub fn new(synthesizer: Synthesizer) -> Self {
        Self { synthesizer }
    }

    /// Rewrite every site; `sites` must be in pre-order
    pub fn rewrite(&self, source: &str, sites: &[RegexSite]) -> RewrittenTree {
        let mut pass = RenderPass {
            source,
            sites,
            synthesizer: &self.synthesizer,
            rendered: 0,
        };

        let mut replacements = Vec::new();
        let mut idx = 0;
        while idx < sites.len() {
            let (fragment, next) = pass.render_site(idx);
            replacements.push(Replacement {
                range: sites[idx].node_range.clone(),
                text: fragment.text,
                site_id: fragment.site_id,
            });
            idx = next;
        }

        RewrittenTree {
            replacements,
            rewritten_sites: pass.rendered,
        }
    }
}

impl<'a> RenderPass<'a> {
    /// Render site `idx` together with its nested sites; returns the index
    /// of the first site after its subtree
    fn render_site(&mut self, idx: usize) -> (InstrumentationFragment, usize) {
        let sites = self.sites;
        let site = &sites[idx];
        let subtree_end = self.subtree_end(idx);
        let nested = idx + 1..subtree_end;

        let fragment = match (&site.form, FragmentShape::for_site(site)) {
            (ConstructionForm::ConstructorCall(call), FragmentShape::Capture) => {
                let arguments = call
                    .arguments_range
                    .clone()
                    .map(|range| self.render_range(range, nested));
                // newlines in the dropped `new RegExp` text
                let callee_end = call
                    .arguments_range
                    .as_ref()
                    .map_or(site.node_range.end, |range| range.start);
                let line_breaks = slice(self.source, site.node_range.start..callee_end)
                    .matches('\n')
                    .count();
                self.synthesizer
                    .capture(site, call, arguments.as_deref(), line_breaks)
            }
            _ => {
                let original = self.render_range(site.node_range.clone(), nested);
                self.synthesizer.wrap(site, &original)
            }
        };

        trace!("Rendered site #{} as {:?}", site.id, fragment.shape);
        self.rendered += 1;
        (fragment, subtree_end)
    }

    /// Text of `range` with the top-level sites among `candidates` rendered
    fn render_range(&mut self, range: Range<usize>, candidates: Range<usize>) -> String {
        let mut out = String::new();
        let mut cursor = range.start;
        let mut idx = candidates.start;

        let sites = self.sites;
        while idx < candidates.end {
            let nested = &sites[idx];
            if nested.node_range.start < range.start || nested.node_range.end > range.end {
                idx = self.subtree_end(idx);
                continue;
            }
            out.push_str(slice(self.source, cursor..nested.node_range.start));
            cursor = nested.node_range.end;
            let (fragment, next) = self.render_site(idx);
            out.push_str(&fragment.text);
            idx = next;
        }

        out.push_str(slice(self.source, cursor..range.end));
        out
    }

    /// One past the last site nested inside site `idx`
    fn subtree_end(&self, idx: usize) -> usize {
        let site = &self.sites[idx];
        let mut end = idx + 1;
        while end < self.sites.len() && site.contains(&self.sites[end]) {
            end += 1;
        }
        end
    }
}

fn slice(source: &str, range: Range<usize>) -> &str {
    source.get(range).unwrap_or("")
}
