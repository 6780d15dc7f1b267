//! Fragment synthesizer
//!
//! Every fragment is one line of JavaScript that evaluates to the same regex
//! object the site would have produced. Logging sits inside `try {} catch {}`
//! so a failing write never changes program behaviour.

use crate::features::instrumentation::domain::{FragmentShape, InstrumentationFragment};
use crate::features::parsing::LanguageId;
use crate::features::site_detection::{ConstructorCall, RegexSite};
use crate::shared::utils::to_js_string_literal;

/// Loads `fs` in both CommonJS and ES module contexts
const FS_MODULE: &str =
    r#"(typeof require === "function" ? require("fs") : process.getBuiltinModule("fs"))"#;

/// Builds fragments for one output file
#[derive(Debug, Clone)]
pub struct Synthesizer {
    prefix: String,
    /// Log path as a JavaScript string literal
    log_path: String,
    /// Annotation appended to fragment parameters (`: any` for TypeScript)
    param_type: &'static str,
}

impl Synthesizer {
    pub fn new(identifier_prefix: impl Into<String>, log_path: &str) -> Self {
        Self {
            prefix: identifier_prefix.into(),
            log_path: to_js_string_literal(log_path),
            param_type: "",
        }
    }

    /// Annotate fragment parameters when the output is TypeScript, so
    /// `noImplicitAny` builds accept it
    pub fn for_language(mut self, language: LanguageId) -> Self {
        self.param_type = match language {
            LanguageId::TypeScript | LanguageId::Tsx => ": any",
            LanguageId::JavaScript => "",
        };
        self
    }

    /// `((rx) => { log; return rx; })(original)`
    ///
    /// `original` is the site's text with nested sites already rendered.
    pub fn wrap(&self, site: &RegexSite, original: &str) -> InstrumentationFragment {
        let rx = self.regex_ident();
        let pattern = site
            .pattern
            .as_deref()
            .map(to_js_string_literal)
            .unwrap_or_else(|| format!("{rx}.source"));
        let flags = site
            .flags
            .as_deref()
            .map(to_js_string_literal)
            .unwrap_or_else(|| format!("{rx}.flags"));

        let text = format!(
            "(({rx}{ty}) => {{ {log} return {rx}; }})({original})",
            ty = self.param_type,
            log = self.guarded_log(site, &pattern, &flags)
        );
        self.finish(site, FragmentShape::Wrap, text)
    }

    /// `((p, f) => { const rx = new RegExp(p, f); log; return rx; })(args)`
    ///
    /// `arguments` is the parenthesized argument list with nested sites
    /// rendered, or `None` for `new RegExp` without parentheses.
    /// `line_breaks` is the number of newlines in the dropped callee text;
    /// they are re-emitted before the argument list so later lines keep
    /// their numbers.
    pub fn capture(
        &self,
        site: &RegexSite,
        call: &ConstructorCall,
        arguments: Option<&str>,
        line_breaks: usize,
    ) -> InstrumentationFragment {
        let rx = self.regex_ident();
        let params = self.parameter_names(call.argument_count);
        let param_list = params.join(", ");
        let typed_params = params
            .iter()
            .map(|p| format!("{p}{}", self.param_type))
            .collect::<Vec<_>>()
            .join(", ");
        let new_kw = if call.with_new { "new " } else { "" };

        let pattern = match (&site.pattern, params.first()) {
            (Some(known), _) => to_js_string_literal(known),
            (None, Some(p)) => format!(r#"typeof {p} === "string" ? {p} : {rx}.source"#),
            (None, None) => format!("{rx}.source"),
        };
        let flags = match (&site.flags, params.get(1)) {
            (Some(known), _) => to_js_string_literal(known),
            (None, Some(f)) => format!(r#"typeof {f} === "string" ? {f} : {rx}.flags"#),
            (None, None) => format!("{rx}.flags"),
        };

        let text = format!(
            "(({typed_params}) => {{ const {rx} = {new_kw}{callee}({param_list}); {log} return {rx}; }}){breaks}{args}",
            callee = call.callee,
            log = self.guarded_log(site, &pattern, &flags),
            breaks = "\n".repeat(line_breaks),
            args = arguments.unwrap_or("()"),
        );
        self.finish(site, FragmentShape::Capture, text)
    }

    fn finish(&self, site: &RegexSite, shape: FragmentShape, text: String) -> InstrumentationFragment {
        let text = if site.starts_statement {
            format!(";{text}")
        } else {
            text
        };
        InstrumentationFragment::new(site.id, shape, text)
    }

    /// `try { fs.appendFileSync(...) } catch (e) {}`
    fn guarded_log(&self, site: &RegexSite, pattern: &str, flags: &str) -> String {
        format!(
            r#"try {{ {FS_MODULE}.appendFileSync({path}, JSON.stringify({{ pattern: {pattern}, flags: {flags}, file: {file}, line: {line}, column: {column} }}) + "\n"); }} catch ({err}) {{}}"#,
            path = self.log_path,
            file = to_js_string_literal(&site.location.file),
            line = site.location.line,
            column = site.location.column,
            err = self.error_ident(),
        )
    }

    /// One parameter per original argument: pattern, flags, then extras
    fn parameter_names(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| match i {
                0 => format!("{}_p", self.prefix),
                1 => format!("{}_f", self.prefix),
                n => format!("{}_a{}", self.prefix, n),
            })
            .collect()
    }

    fn regex_ident(&self) -> &str {
        &self.prefix
    }

    fn error_ident(&self) -> String {
        format!("{}_e", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstrumentConfig;
    use crate::features::parsing::{LanguageId, Parser, TreeSitterParser};
    use crate::features::site_detection::RegexSiteDetector;

    fn sites(source: &str) -> Vec<RegexSite> {
        let tree = TreeSitterParser::new(LanguageId::JavaScript)
            .parse(source, "app.js")
            .unwrap();
        RegexSiteDetector::new(&InstrumentConfig::default())
            .detect(&tree)
            .sites
    }

    #[test]
    fn test_wrap_literal() {
        let site = &sites("x = /ab+c/gi;")[0];
        let fragment = Synthesizer::new("__rx", "/tmp/log.ndjson").wrap(site, "/ab+c/gi");
        assert_eq!(fragment.shape, FragmentShape::Wrap);
        assert!(fragment.text.starts_with("((__rx) => { try { "));
        assert!(fragment.text.ends_with("return __rx; })(/ab+c/gi)"));
        assert!(fragment.text.contains(
            r#"JSON.stringify({ pattern: "ab+c", flags: "gi", file: "app.js", line: 1, column: 4 })"#
        ));
        assert!(fragment.text.contains(r#".appendFileSync("/tmp/log.ndjson", "#));
        assert!(fragment.text.contains("catch (__rx_e) {}"));
    }

    #[test]
    fn test_statement_start_gets_semicolon() {
        let site = &sites("/a/.test(s);")[0];
        let fragment = Synthesizer::new("__rx", "log").wrap(site, "/a/");
        assert!(fragment.text.starts_with(";((__rx) =>"));
    }

    #[test]
    fn test_capture_dynamic_pattern() {
        let all = sites("x = new RegExp(p, 'g');");
        let site = &all[0];
        let call = site.constructor_call().unwrap();
        let fragment = Synthesizer::new("__rx", "log").capture(site, call, Some("(p, 'g')"), 0);
        assert_eq!(fragment.shape, FragmentShape::Capture);
        assert!(fragment.text.starts_with(
            "((__rx_p, __rx_f) => { const __rx = new RegExp(__rx_p, __rx_f); try { "
        ));
        assert!(fragment
            .text
            .contains(r#"pattern: typeof __rx_p === "string" ? __rx_p : __rx.source, flags: "g""#));
        assert!(fragment.text.ends_with("return __rx; })(p, 'g')"));
    }

    #[test]
    fn test_capture_keeps_arity_and_call_form() {
        let all = sites("x = RegExp(r);");
        let site = &all[0];
        let call = site.constructor_call().unwrap();
        let fragment = Synthesizer::new("__rx", "log").capture(site, call, Some("(r)"), 0);
        assert!(fragment
            .text
            .starts_with("((__rx_p) => { const __rx = RegExp(__rx_p); "));
        assert!(fragment.text.contains("flags: __rx.flags"));
    }

    #[test]
    fn test_capture_reemits_line_breaks() {
        let all = sites("x = new\nRegExp(p);");
        let site = &all[0];
        let call = site.constructor_call().unwrap();
        let fragment = Synthesizer::new("__rx", "log").capture(site, call, Some("(p)"), 1);
        assert_eq!(fragment.text.matches('\n').count(), 1);
        assert!(fragment.text.ends_with("})\n(p)"));
    }

    #[test]
    fn test_typescript_parameters_are_annotated() {
        let all = sites("x = new RegExp(p, 'g'); y = /a/;");
        let synthesizer = Synthesizer::new("__rx", "log").for_language(LanguageId::TypeScript);

        let call = all[0].constructor_call().unwrap();
        let captured = synthesizer.capture(&all[0], call, Some("(p, 'g')"), 0);
        assert!(captured.text.starts_with(
            "((__rx_p: any, __rx_f: any) => { const __rx = new RegExp(__rx_p, __rx_f); "
        ));

        let wrapped = synthesizer.wrap(&all[1], "/a/");
        assert!(wrapped.text.starts_with("((__rx: any) => {"));
    }

    #[test]
    fn test_javascript_parameters_are_plain() {
        let site = &sites("y = /a/;")[0];
        let fragment = Synthesizer::new("__rx", "log")
            .for_language(LanguageId::JavaScript)
            .wrap(site, "/a/");
        assert!(fragment.text.starts_with("((__rx) => {"));
    }

    #[test]
    fn test_custom_prefix() {
        let site = &sites("x = /a/;")[0];
        let fragment = Synthesizer::new("$trace", "log").wrap(site, "/a/");
        assert!(fragment.text.starts_with("(($trace) => {"));
        assert!(fragment.text.contains("catch ($trace_e) {}"));
    }

    #[test]
    fn test_escapes_file_and_pattern() {
        let tree = TreeSitterParser::new(LanguageId::JavaScript)
            .parse("x = /\"q\"/;", "dir\\a \"b\".js")
            .unwrap();
        let detected = RegexSiteDetector::new(&InstrumentConfig::default()).detect(&tree);
        let site = &detected.sites[0];
        let fragment = Synthesizer::new("__rx", "log").wrap(site, "/\"q\"/");
        assert!(fragment.text.contains(r#"pattern: "\"q\"""#));
        assert!(fragment.text.contains(r#"file: "dir\\a \"b\".js""#));
    }
}
