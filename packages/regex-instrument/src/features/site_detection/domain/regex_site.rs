//! Regex construction site records
//!
//! A `RegexSite` lives for exactly one pass: produced by the detector,
//! consumed by the rewriter, then dropped with the rest of the pass state.

use std::fmt;
use std::ops::Range;

use crate::errors::InstrumentError;
use crate::shared::models::SourceLocation;
use crate::shared::utils::Binding;

/// One syntactic point where a regex object is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexSite {
    /// Pre-order index within the file
    pub id: usize,
    /// Byte range of the whole construction expression
    pub node_range: Range<usize>,
    pub location: SourceLocation,

    pub pattern_known: bool,
    pub pattern: Option<String>,
    pub flags_known: bool,
    pub flags: Option<String>,

    pub form: ConstructionForm,

    /// The expression is the first token of a statement in a statement list.
    /// A fragment starting with `(` there needs a leading `;` so it cannot
    /// be read as a call on the previous line.
    pub starts_statement: bool,
}

/// How the regex is constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionForm {
    /// `/pattern/flags`
    Literal,
    /// `new RegExp(...)` or `RegExp(...)`
    ConstructorCall(ConstructorCall),
}

/// Details of a constructor-call site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorCall {
    pub with_new: bool,
    /// Callee identifier as written
    pub callee: String,
    pub callee_binding: Binding,
    /// Byte range of the parenthesized argument list; `None` for `new RegExp`
    pub arguments_range: Option<Range<usize>>,
    pub argument_count: usize,
}

impl RegexSite {
    /// Both pattern and flags are compile-time constants
    pub fn is_static(&self) -> bool {
        self.pattern_known && self.flags_known
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.form, ConstructionForm::Literal)
    }

    pub fn constructor_call(&self) -> Option<&ConstructorCall> {
        match &self.form {
            ConstructionForm::ConstructorCall(call) => Some(call),
            ConstructionForm::Literal => None,
        }
    }

    /// Whether `other` lies strictly inside this site's expression
    pub fn contains(&self, other: &RegexSite) -> bool {
        self.node_range.start <= other.node_range.start
            && other.node_range.end <= self.node_range.end
            && self.node_range != other.node_range
    }
}

/// Why a construction site was left uninstrumented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `new RegExp(...args)`: argument count unknown
    SpreadArgument,
    /// `RegExp?.(...)`: construction may not happen at all
    OptionalCall,
    /// ``RegExp`...` ``: tagged template, not a plain call
    TaggedTemplate,
    /// `new RegExp<T>(...)`: explicit type arguments
    TypeArguments,
    /// Callee name bound locally and the shadow policy is `skip`
    ShadowedConstructor,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::SpreadArgument => "spread argument",
            SkipReason::OptionalCall => "optional call",
            SkipReason::TaggedTemplate => "tagged template",
            SkipReason::TypeArguments => "explicit type arguments",
            SkipReason::ShadowedConstructor => "constructor name is shadowed",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognised construction site that was not instrumented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSite {
    pub node_range: Range<usize>,
    pub location: SourceLocation,
    pub reason: SkipReason,
}

impl SkippedSite {
    pub fn to_error(&self) -> InstrumentError {
        InstrumentError::UnsupportedConstruct {
            file: self.location.file.clone(),
            line: self.location.line,
            column: self.location.column,
            reason: self.reason,
        }
    }
}

/// Output of one detection pass
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    /// Sites in source (pre-order) order
    pub sites: Vec<RegexSite>,
    pub skipped: Vec<SkippedSite>,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
