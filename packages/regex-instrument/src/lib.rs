/*
 * regex-instrument - Regex construction-site instrumentation for JavaScript/TypeScript
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (SourceLocation, LogRecord) and tree-sitter helpers
 * - features/    : Vertical slices (parsing → site_detection → instrumentation → rewriting)
 * - pipeline/    : Orchestration (all-or-nothing pass over one source file)
 * - config/      : InstrumentConfig + versioned YAML loading
 *
 * The pass is single-threaded and synchronous: detection is read-only, rendering
 * happens afterwards over the collected sites, inner-most first.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, detection, synthesis, rewriting, extraction)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{InstrumentConfig, ShadowPolicy};
pub use errors::{InstrumentError, Result};
pub use features::extraction::{extract_static_regexes, FileRegexes, StaticRegex};
pub use features::parsing::{LanguageId, ParsedTree};
pub use features::site_detection::{ConstructionForm, RegexSite, SkipReason, SkippedSite};
pub use pipeline::{InstrumentOutput, InstrumentPipeline};
pub use shared::models::{read_log_records, LogRecord, SourceLocation};
