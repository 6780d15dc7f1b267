//! Pipeline result types

use crate::features::site_detection::{RegexSite, SkippedSite};

/// Output of one instrumentation pass
#[derive(Debug, Clone)]
pub struct InstrumentOutput {
    /// Rewritten program text
    pub code: String,
    /// Instrumented sites, in source order
    pub sites: Vec<RegexSite>,
    /// Recognised but uninstrumented sites
    pub skipped: Vec<SkippedSite>,
}

impl InstrumentOutput {
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Sites whose pattern and flags are both compile-time constants
    pub fn static_site_count(&self) -> usize {
        self.sites.iter().filter(|site| site.is_static()).count()
    }
}
