//! Lexical scope stack
//!
//! Tracks nested JavaScript scopes during AST traversal so a callee name can
//! be resolved to either a local declaration or the global object.

use rustc_hash::FxHashSet;

/// Scope kind (tagged so `with` bodies can be told apart)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Top-level script/module scope
    Program,
    /// Function, arrow, method or static block (`var` target)
    Function,
    /// Block, loop head, switch body
    Block,
    /// Catch clause parameter scope
    Catch,
    /// Class scope (binds the class name inside its body)
    Class,
    /// `with` body: any free name may resolve to an object property
    With,
}

/// Resolution result for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// No enclosing declaration: refers to the global object
    Global,
    /// Declared in an enclosing scope of this kind
    Local(ScopeKind),
    /// Inside a `with` body, cannot be decided statically
    Unresolvable,
}

#[derive(Debug, Clone)]
struct Scope {
    kind: ScopeKind,
    bindings: FxHashSet<String>,
}

/// Scope stack for resolving identifiers lexically
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Push a new scope with its (already hoisted) declarations
    pub fn push<I, S>(&mut self, kind: ScopeKind, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.push(Scope {
            kind,
            bindings: names.into_iter().map(Into::into).collect(),
        });
    }

    /// Pop the current scope
    pub fn pop(&mut self) -> Option<ScopeKind> {
        self.scopes.pop().map(|s| s.kind)
    }

    /// Resolve a name from the innermost scope outwards
    pub fn resolve(&self, name: &str) -> Binding {
        for scope in self.scopes.iter().rev() {
            if scope.bindings.contains(name) {
                return Binding::Local(scope.kind);
            }
            if scope.kind == ScopeKind::With {
                return Binding::Unresolvable;
            }
        }
        Binding::Global
    }
}
