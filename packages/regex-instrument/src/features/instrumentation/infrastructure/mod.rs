//! Instrumentation infrastructure

mod synthesizer;

pub use synthesizer::Synthesizer;
