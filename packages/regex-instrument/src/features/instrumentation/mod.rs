//! Instrumentation Feature
//!
//! Synthesizes the single-expression logging fragment that replaces each
//! regex construction site.
//!
//! ## Shapes
//! - **Wrap**: the original expression is passed to an arrow that logs
//!   static pattern/flags and returns the regex unchanged
//! - **Capture**: the original arguments are bound to arrow parameters, the
//!   regex is constructed inside the arrow and runtime values are logged

pub mod domain;
pub mod infrastructure;

pub use domain::{FragmentShape, InstrumentationFragment};
pub use infrastructure::Synthesizer;
