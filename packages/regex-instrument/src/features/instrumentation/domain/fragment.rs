//! Instrumentation fragment

use crate::features::site_detection::RegexSite;

/// How a site is instrumented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentShape {
    /// Evaluate the original expression, then log constants
    Wrap,
    /// Bind the original arguments, construct inside, log runtime values
    Capture,
}

impl FragmentShape {
    /// Literals and fully static constructor calls are wrapped; anything
    /// with a runtime part is captured
    pub fn for_site(site: &RegexSite) -> Self {
        if site.is_literal() || site.is_static() {
            FragmentShape::Wrap
        } else {
            FragmentShape::Capture
        }
    }
}

/// Replacement text for one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentationFragment {
    pub site_id: usize,
    pub shape: FragmentShape,
    /// Self-contained expression, same value as the original site
    pub text: String,
}

impl InstrumentationFragment {
    pub fn new(site_id: usize, shape: FragmentShape, text: String) -> Self {
        Self {
            site_id,
            shape,
            text,
        }
    }
}
