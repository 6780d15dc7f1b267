//! Rewriting infrastructure

mod printer;

pub use printer::print_source;
