//! Pipeline orchestration
//!
//! One pass over one source file: parse → detect → synthesize → rewrite →
//! verify. The pass is all-or-nothing; any fatal error means no output.

mod instrument_pipeline;
mod result;

pub use instrument_pipeline::InstrumentPipeline;
pub use result::InstrumentOutput;
