//! Declaration scanning
//!
//! Computes, for a node that opens a scope, the kind of scope and the names
//! declared directly in it. Names are collected up front on scope entry, so a
//! use that textually precedes its declaration (hoisting, TDZ) still resolves
//! to the local binding.

use tree_sitter::Node;

use crate::shared::utils::tree_sitter::{extract_node_text, is_function_like, named_children};
use crate::shared::utils::ScopeKind;

/// Scope opened by `node`, with the names it declares
///
/// Returns `None` for nodes that do not open a scope. `with_statement` is not
/// handled here: only its body is affected, so the walker treats it itself.
pub fn scope_for(node: Node, source: &str) -> Option<(ScopeKind, Vec<String>)> {
    let (kind, mut names) = scope_names(node, source)?;
    names.sort_unstable();
    names.dedup();
    Some((kind, names))
}

fn scope_names(node: Node, source: &str) -> Option<(ScopeKind, Vec<String>)> {
    let kind = node.kind();
    match kind {
        "program" => {
            let mut names = hoisted_var_names(node, source);
            lexical_names(node, source, &mut names);
            Some((ScopeKind::Program, names))
        }
        "class_static_block" => {
            let names = node
                .child_by_field_name("body")
                .map(|body| hoisted_var_names(body, source))
                .unwrap_or_default();
            Some((ScopeKind::Function, names))
        }
        _ if is_function_like(kind) => Some((ScopeKind::Function, function_names(node, source))),
        "statement_block" => {
            let mut names = Vec::new();
            lexical_names(node, source, &mut names);
            Some((ScopeKind::Block, names))
        }
        "switch_body" => {
            let mut names = Vec::new();
            for case in named_children(node) {
                lexical_names(case, source, &mut names);
            }
            Some((ScopeKind::Block, names))
        }
        "for_statement" => {
            let mut names = Vec::new();
            for child in named_children(node) {
                if child.kind() == "lexical_declaration" {
                    declarator_names(child, source, &mut names);
                }
            }
            Some((ScopeKind::Block, names))
        }
        "for_in_statement" => {
            let mut names = Vec::new();
            if is_lexical_loop_head(node) {
                if let Some(left) = node.child_by_field_name("left") {
                    pattern_names(left, source, &mut names);
                }
            }
            Some((ScopeKind::Block, names))
        }
        "catch_clause" => {
            let mut names = Vec::new();
            if let Some(param) = node.child_by_field_name("parameter") {
                pattern_names(param, source, &mut names);
            }
            Some((ScopeKind::Catch, names))
        }
        "class_declaration" | "class" | "abstract_class_declaration" => {
            let names = node
                .child_by_field_name("name")
                .map(|name| vec![extract_node_text(name, source).to_string()])
                .unwrap_or_default();
            Some((ScopeKind::Class, names))
        }
        _ => None,
    }
}

/// Parameters, hoisted `var`s and (for named function expressions) the
/// function's own name
fn function_names(node: Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();

    if let Some(params) = node.child_by_field_name("parameters") {
        pattern_names(params, source, &mut names);
    }
    // `x => ...` has a bare identifier in place of a parameter list
    if let Some(param) = node.child_by_field_name("parameter") {
        pattern_names(param, source, &mut names);
    }

    if matches!(node.kind(), "function" | "function_expression" | "generator_function") {
        if let Some(name) = node.child_by_field_name("name") {
            names.push(extract_node_text(name, source).to_string());
        }
    }

    if let Some(body) = node.child_by_field_name("body") {
        if body.kind() == "statement_block" {
            names.extend(hoisted_var_names(body, source));
        }
    }
    names
}

/// Names bound by a binding pattern (identifiers, destructuring, defaults,
/// rest elements, TypeScript parameter wrappers)
pub fn pattern_names(node: Node, source: &str, out: &mut Vec<String>) {
    match node.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => {
            out.push(extract_node_text(node, source).to_string());
        }
        "pair_pattern" => {
            if let Some(value) = node.child_by_field_name("value") {
                pattern_names(value, source, out);
            }
        }
        "assignment_pattern" | "object_assignment_pattern" => {
            if let Some(left) = node.child_by_field_name("left") {
                pattern_names(left, source, out);
            }
        }
        "required_parameter" | "optional_parameter" => {
            if let Some(pattern) = node.child_by_field_name("pattern") {
                pattern_names(pattern, source, out);
            }
        }
        "object_pattern" | "array_pattern" | "rest_pattern" | "formal_parameters" => {
            for child in named_children(node) {
                pattern_names(child, source, out);
            }
        }
        _ => {}
    }
}

/// `var` names (and nested function declarations) hoisting to the scope
/// whose body is `node`; does not cross into nested functions
pub fn hoisted_var_names(node: Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for child in named_children(node) {
        collect_hoisted(child, source, &mut names);
    }
    names
}

fn collect_hoisted(node: Node, source: &str, out: &mut Vec<String>) {
    match node.kind() {
        "variable_declaration" => {
            declarator_names(node, source, out);
        }
        "for_in_statement" if !is_lexical_loop_head(node) && has_var_keyword(node) => {
            if let Some(left) = node.child_by_field_name("left") {
                pattern_names(left, source, out);
            }
        }
        "function_declaration" | "generator_function_declaration" => {
            if let Some(name) = node.child_by_field_name("name") {
                out.push(extract_node_text(name, source).to_string());
            }
            return;
        }
        "class_body" | "ambient_declaration" => return,
        kind if is_function_like(kind) => return,
        _ => {}
    }

    for child in named_children(node) {
        collect_hoisted(child, source, out);
    }
}

/// Block-scoped names declared directly in a statement list
pub fn lexical_names(node: Node, source: &str, out: &mut Vec<String>) {
    for child in named_children(node) {
        lexical_statement_names(child, source, out);
    }
}

fn lexical_statement_names(stmt: Node, source: &str, out: &mut Vec<String>) {
    match stmt.kind() {
        "lexical_declaration" => declarator_names(stmt, source, out),
        "class_declaration"
        | "abstract_class_declaration"
        | "function_declaration"
        | "generator_function_declaration"
        | "enum_declaration" => {
            if let Some(name) = stmt.child_by_field_name("name") {
                out.push(extract_node_text(name, source).to_string());
            }
        }
        "export_statement" => {
            if let Some(decl) = stmt.child_by_field_name("declaration") {
                lexical_statement_names(decl, source, out);
                if decl.kind() == "variable_declaration" {
                    declarator_names(decl, source, out);
                }
            }
        }
        "import_statement" => import_names(stmt, source, out),
        _ => {}
    }
}

fn declarator_names(decl: Node, source: &str, out: &mut Vec<String>) {
    for declarator in named_children(decl) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        if let Some(name) = declarator.child_by_field_name("name") {
            pattern_names(name, source, out);
        }
    }
}

fn import_names(stmt: Node, source: &str, out: &mut Vec<String>) {
    // `import type { X }` binds no runtime value
    if has_token(stmt, "type") {
        return;
    }
    let Some(clause) = named_children(stmt)
        .into_iter()
        .find(|c| c.kind() == "import_clause")
    else {
        return;
    };

    for part in named_children(clause) {
        match part.kind() {
            "identifier" => out.push(extract_node_text(part, source).to_string()),
            "namespace_import" => {
                for id in named_children(part) {
                    if id.kind() == "identifier" {
                        out.push(extract_node_text(id, source).to_string());
                    }
                }
            }
            "named_imports" => {
                for specifier in named_children(part) {
                    if specifier.kind() != "import_specifier" || has_token(specifier, "type") {
                        continue;
                    }
                    let local = specifier
                        .child_by_field_name("alias")
                        .or_else(|| specifier.child_by_field_name("name"));
                    if let Some(local) = local {
                        out.push(extract_node_text(local, source).to_string());
                    }
                }
            }
            _ => {}
        }
    }
}

/// `for (let x of ...)` / `for (const x in ...)`
fn is_lexical_loop_head(node: Node) -> bool {
    has_token(node, "let") || has_token(node, "const")
}

fn has_var_keyword(node: Node) -> bool {
    has_token(node, "var")
}

/// Anonymous child token of the given kind
fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}
