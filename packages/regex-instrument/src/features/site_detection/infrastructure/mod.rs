//! Site detection infrastructure

pub mod bindings;
mod detector;

pub use detector::RegexSiteDetector;
