//! Common test utilities for regex-instrument
//!
//! Fixtures, pipeline shortcuts and a Node runner for execution tests.

#![allow(dead_code)]

mod fixtures;
mod node;

pub use fixtures::*;
pub use node::*;

use regex_instrument::features::parsing::{LanguageId, Parser, TreeSitterParser};
use regex_instrument::{InstrumentOutput, InstrumentPipeline};

/// Instrument with the default configuration
pub fn instrument(source: &str, file: &str, log_path: &str) -> InstrumentOutput {
    InstrumentPipeline::default()
        .instrument_source(source, file, log_path)
        .unwrap_or_else(|e| panic!("instrumenting {file} failed: {e}\n---\n{source}"))
}

/// Number of logging fragments in generated code
pub fn fragment_count(code: &str) -> usize {
    code.matches("catch (__rx_e) {}").count()
}

/// Whether `code` parses without syntax errors
pub fn parses_cleanly(code: &str, language: LanguageId) -> bool {
    TreeSitterParser::new(language)
        .parse(code, "reparse")
        .map(|tree| !tree.has_errors())
        .unwrap_or(false)
}
