//! Shared models and utilities used by every feature slice

pub mod models;
pub mod utils;
