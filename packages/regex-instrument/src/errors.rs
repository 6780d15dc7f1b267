//! Error types for regex-instrument
//!
//! Provides unified error handling across the crate. Every fatal variant
//! aborts the whole pass; per-site problems are recorded as
//! [`SkippedSite`](crate::features::site_detection::SkippedSite) instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::site_detection::SkipReason;

/// Main error type for instrumentation operations
#[derive(Debug, Error)]
pub enum InstrumentError {
    /// Wrong command-line usage (driver only)
    #[error("Usage error: {0}")]
    Usage(String),

    /// Source file missing or unreadable
    #[error("Failed to read source file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid in the supported grammar
    #[error("Parse error in {file}:{line}:{column}: {message}")]
    Parse {
        file: String,
        line: u32,
        column: u32,
        message: String,
    },

    /// A construction site the synthesizer cannot safely sequence.
    /// Never fatal: only used to report skipped sites.
    #[error("Unsupported construct in {file}:{line}:{column}: {reason}")]
    UnsupportedConstruct {
        file: String,
        line: u32,
        column: u32,
        reason: SkipReason,
    },

    /// The rewritten program no longer parses
    #[error("Rewritten output of {file} does not parse (first error at {line}:{column})")]
    OutputVerification { file: String, line: u32, column: u32 },

    /// Grammar could not be loaded into the parser
    #[error("Language error: {0}")]
    Language(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstrumentError {
    /// Create a parse error at a 1-based line / 0-based column
    pub fn parse(file: impl Into<String>, line: u32, column: u32, message: impl Into<String>) -> Self {
        InstrumentError::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a source read error
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstrumentError::SourceRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for instrumentation operations
pub type Result<T> = std::result::Result<T, InstrumentError>;
