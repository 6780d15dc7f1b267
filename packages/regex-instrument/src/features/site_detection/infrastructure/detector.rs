//! Regex construction site detector
//!
//! Single read-only pre-order walk over the tree. A scope stack tracks local
//! declarations so a `RegExp` callee can be classified as the global
//! constructor or as a shadowing binding.

use tree_sitter::Node;
use tracing::{debug, warn};

use super::bindings::scope_for;
use crate::config::{InstrumentConfig, ShadowPolicy};
use crate::features::parsing::ParsedTree;
use crate::features::site_detection::domain::{
    ConstructionForm, ConstructorCall, DetectionResult, RegexSite, SkipReason, SkippedSite,
};
use crate::shared::utils::tree_sitter::{
    extract_node_text, find_child_by_kind, has_child_kind, named_children, node_location,
};
use crate::shared::utils::{cook_string_literal, cook_template_literal, Binding, ScopeKind, ScopeStack};

/// Statement-list parents after which a statement may begin with `(`
const STATEMENT_LIST_KINDS: &[&str] = &["program", "statement_block", "switch_case", "switch_default"];

/// Finds regex literals and constructor calls
pub struct RegexSiteDetector<'cfg> {
    config: &'cfg InstrumentConfig,
}

impl<'cfg> RegexSiteDetector<'cfg> {
    pub fn new(config: &'cfg InstrumentConfig) -> Self {
        Self { config }
    }

    /// Collect every construction site in pre-order
    pub fn detect(&self, tree: &ParsedTree) -> DetectionResult {
        let mut pass = DetectionPass {
            config: self.config,
            source: &tree.source,
            file: &tree.file_path,
            scopes: ScopeStack::new(),
            result: DetectionResult::new(),
        };
        pass.visit(tree.root_node());

        debug!(
            "Detected {} regex sites in {} ({} skipped)",
            pass.result.sites.len(),
            tree.file_path,
            pass.result.skipped.len()
        );
        pass.result
    }
}

/// Mutable state of one walk
struct DetectionPass<'a> {
    config: &'a InstrumentConfig,
    source: &'a str,
    file: &'a str,
    scopes: ScopeStack,
    result: DetectionResult,
}

/// Pattern/flags knowledge for one argument
struct ArgumentValue {
    known: bool,
    value: Option<String>,
}

impl ArgumentValue {
    fn known(value: impl Into<String>) -> Self {
        Self {
            known: true,
            value: Some(value.into()),
        }
    }

    fn unknown() -> Self {
        Self {
            known: false,
            value: None,
        }
    }
}

impl<'a> DetectionPass<'a> {
    fn visit(&mut self, node: Node) {
        match node.kind() {
            // A regex literal has no children worth visiting
            "regex" => {
                self.record_literal(node);
                return;
            }
            "new_expression" | "call_expression" => self.inspect_call(node),
            "with_statement" => {
                self.visit_with(node);
                return;
            }
            _ => {}
        }

        match scope_for(node, self.source) {
            Some((kind, names)) => {
                self.scopes.push(kind, names);
                self.visit_children(node);
                self.scopes.pop();
            }
            None => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node) {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children {
            self.visit(child);
        }
    }

    /// `with (obj) body`: the object is evaluated outside, the body inside
    /// a scope where any free name may be a property of `obj`
    fn visit_with(&mut self, node: Node) {
        if let Some(object) = node.child_by_field_name("object") {
            self.visit(object);
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.scopes.push(ScopeKind::With, Vec::<String>::new());
            self.visit(body);
            self.scopes.pop();
        }
    }

    fn record_literal(&mut self, node: Node) {
        let pattern = node
            .child_by_field_name("pattern")
            .or_else(|| find_child_by_kind(node, "regex_pattern"))
            .map(|n| extract_node_text(n, self.source))
            .unwrap_or_default();
        let flags = node
            .child_by_field_name("flags")
            .or_else(|| find_child_by_kind(node, "regex_flags"))
            .map(|n| extract_node_text(n, self.source))
            .unwrap_or_default();

        self.push_site(
            node,
            ArgumentValue::known(pattern),
            ArgumentValue::known(flags),
            ConstructionForm::Literal,
        );
    }

    /// Classify a call or `new` expression whose callee is a constructor name
    fn inspect_call(&mut self, node: Node) {
        let with_new = node.kind() == "new_expression";
        let callee_field = if with_new { "constructor" } else { "function" };
        let Some(callee) = node.child_by_field_name(callee_field) else {
            return;
        };
        if callee.kind() != "identifier" {
            return;
        }
        let callee_name = extract_node_text(callee, self.source);
        if !self.config.is_constructor_name(callee_name) {
            return;
        }

        if node.child_by_field_name("type_arguments").is_some() {
            self.skip(node, SkipReason::TypeArguments);
            return;
        }
        if has_child_kind(node, "optional_chain") {
            self.skip(node, SkipReason::OptionalCall);
            return;
        }

        let arguments = node.child_by_field_name("arguments");
        match arguments {
            Some(args) if args.kind() != "arguments" => {
                self.skip(node, SkipReason::TaggedTemplate);
                return;
            }
            None if !with_new => return,
            _ => {}
        }

        let arg_nodes = arguments.map(named_children).unwrap_or_default();
        if arg_nodes.iter().any(|arg| arg.kind() == "spread_element") {
            self.skip(node, SkipReason::SpreadArgument);
            return;
        }

        let binding = self.scopes.resolve(callee_name);
        if binding != Binding::Global && self.config.shadow_policy == ShadowPolicy::Skip {
            self.skip(node, SkipReason::ShadowedConstructor);
            return;
        }

        let (pattern, flags) = if binding == Binding::Global {
            let pattern = match arg_nodes.first() {
                Some(arg) => self.static_value(*arg),
                None => ArgumentValue::known(""),
            };
            let flags = match arg_nodes.get(1) {
                Some(arg) => self.static_value(*arg),
                // `undefined` flags mean "" only for a string pattern; a regex
                // argument would keep its own flags
                None if pattern.known => ArgumentValue::known(""),
                None => ArgumentValue::unknown(),
            };
            (pattern, flags)
        } else {
            debug!(
                "{} is shadowed at {}; logging runtime values",
                callee_name,
                node_location(node, self.source, self.file)
            );
            (ArgumentValue::unknown(), ArgumentValue::unknown())
        };

        let form = ConstructionForm::ConstructorCall(ConstructorCall {
            with_new,
            callee: callee_name.to_string(),
            callee_binding: binding,
            arguments_range: arguments.map(|args| args.byte_range()),
            argument_count: arg_nodes.len(),
        });
        self.push_site(node, pattern, flags, form);
    }

    /// Compile-time value of a string literal or substitution-free template
    fn static_value(&self, arg: Node) -> ArgumentValue {
        let raw = extract_node_text(arg, self.source);
        let cooked = match arg.kind() {
            "string" => cook_string_literal(raw),
            "template_string" if !has_child_kind(arg, "template_substitution") => {
                cook_template_literal(raw)
            }
            _ => None,
        };
        match cooked {
            Some(value) => ArgumentValue::known(value),
            None => ArgumentValue::unknown(),
        }
    }

    fn push_site(
        &mut self,
        node: Node,
        pattern: ArgumentValue,
        flags: ArgumentValue,
        form: ConstructionForm,
    ) {
        let site = RegexSite {
            id: self.result.sites.len(),
            node_range: node.byte_range(),
            location: node_location(node, self.source, self.file),
            pattern_known: pattern.known,
            pattern: pattern.value,
            flags_known: flags.known,
            flags: flags.value,
            form,
            starts_statement: starts_statement(node),
        };
        debug!(
            "Regex site #{} at {} (static: {})",
            site.id,
            site.location,
            site.is_static()
        );
        self.result.sites.push(site);
    }

    fn skip(&mut self, node: Node, reason: SkipReason) {
        let skipped = SkippedSite {
            node_range: node.byte_range(),
            location: node_location(node, self.source, self.file),
            reason,
        };
        warn!("Not instrumenting: {}", skipped.to_error());
        self.result.skipped.push(skipped);
    }
}

/// Whether `node` is the leftmost token of an expression statement that sits
/// in a statement list
fn starts_statement(node: Node) -> bool {
    let start = node.start_byte();
    let mut current = node;
    while let Some(parent) = current.parent() {
        if parent.start_byte() != start {
            return false;
        }
        if parent.kind() == "expression_statement" {
            return parent
                .parent()
                .is_some_and(|list| STATEMENT_LIST_KINDS.contains(&list.kind()));
        }
        current = parent;
    }
    false
}
