//! Regex-Site Detection Feature
//!
//! Walks a parsed program and classifies every regex construction site:
//! regex literals and `RegExp` constructor calls (with or without `new`).
//!
//! ## Structure
//! - `domain/` - RegexSite, SkippedSite, DetectionResult
//! - `infrastructure/` - scope-aware tree walker and declaration scanner

pub mod domain;
pub mod infrastructure;

pub use domain::{
    ConstructionForm, ConstructorCall, DetectionResult, RegexSite, SkipReason, SkippedSite,
};
pub use infrastructure::RegexSiteDetector;
