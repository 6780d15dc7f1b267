//! Instrumentation domain models

mod fragment;

pub use fragment::{FragmentShape, InstrumentationFragment};
