//! Feature slices, leaf-first:
//! parsing → site_detection → instrumentation → rewriting.
//! `extraction` reuses detection for a static, non-rewriting report.

pub mod extraction;
pub mod instrumentation;
pub mod parsing;
pub mod rewriting;
pub mod site_detection;
