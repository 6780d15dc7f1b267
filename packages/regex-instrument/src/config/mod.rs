//! Configuration System
//!
//! `InstrumentConfig` holds every knob of a pass. It can be built in code
//! (defaults + builder methods) or loaded from a versioned YAML file:
//!
//! ```yaml
//! version: 1
//! constructor_names: [RegExp]
//! shadow_policy: dynamic
//! identifier_prefix: __rx
//! verify_output: true
//! ```
//!
//! The `instrument` driver looks for such a file in the
//! `REGEX_INSTRUMENT_CONFIG` environment variable.

pub mod error;
pub mod instrument_config;
pub mod io;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use instrument_config::{InstrumentConfig, ShadowPolicy, CONFIG_ENV_VAR};
pub use io::ConfigFileV1;
