//! Site detection domain models

mod regex_site;

pub use regex_site::{
    ConstructionForm, ConstructorCall, DetectionResult, RegexSite, SkipReason, SkippedSite,
};
