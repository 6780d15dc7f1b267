//! Instrumentation invariants on whole programs
//!
//! - No sites: output is byte-identical
//! - One fragment per detected site, in source order
//! - Output re-parses without errors and keeps its line structure

mod common;

use common::*;
use pretty_assertions::assert_eq;
use regex_instrument::features::parsing::LanguageId;
use regex_instrument::{InstrumentError, InstrumentPipeline};

#[test]
fn plain_program_is_unchanged() {
    let source = PLAIN_STATEMENTS.join("\n") + "\n";
    let output = instrument(&source, "plain.js", "/tmp/log.ndjson");
    assert_eq!(output.code, source);
    assert!(output.sites.is_empty());
}

#[test]
fn one_fragment_per_site() {
    for (statement, expected) in REGEX_STATEMENTS {
        let output = instrument(statement, "one.js", "/tmp/log.ndjson");
        assert_eq!(output.site_count(), *expected, "sites in {statement}");
        assert_eq!(fragment_count(&output.code), *expected, "fragments in {statement}");
    }
}

#[test]
fn sites_are_in_source_order() {
    let source = REGEX_STATEMENTS
        .iter()
        .map(|(s, _)| *s)
        .collect::<Vec<_>>()
        .join("\n");
    let output = instrument(&source, "all.js", "/tmp/log.ndjson");
    let positions: Vec<(u32, u32)> = output
        .sites
        .iter()
        .map(|site| (site.location.line, site.location.column))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(output.sites.iter().enumerate().all(|(i, site)| site.id == i));
}

#[test]
fn output_reparses_and_keeps_lines() {
    let mut source = String::new();
    for (i, (statement, _)) in REGEX_STATEMENTS.iter().enumerate() {
        source.push_str(PLAIN_STATEMENTS[i % PLAIN_STATEMENTS.len()]);
        source.push('\n');
        source.push_str(statement);
        source.push('\n');
    }
    let output = instrument(&source, "mixed.js", "/tmp/log.ndjson");
    assert!(parses_cleanly(&output.code, LanguageId::JavaScript), "{}", output.code);
    assert_eq!(output.code.lines().count(), source.lines().count());
}

#[test]
fn literal_record_fields() {
    let output = instrument("const re = /ab+c/gi;\n", "src/app.js", "/tmp/log.ndjson");
    let site = &output.sites[0];
    assert_eq!(site.pattern.as_deref(), Some("ab+c"));
    assert_eq!(site.flags.as_deref(), Some("gi"));
    assert_eq!((site.location.line, site.location.column), (1, 11));
    assert!(output.code.contains(
        r#"{ pattern: "ab+c", flags: "gi", file: "src/app.js", line: 1, column: 11 }"#
    ));
    assert!(output.code.contains(r#"appendFileSync("/tmp/log.ndjson", "#));
}

#[test]
fn side_effecting_argument_is_evaluated_once() {
    let output = instrument(SIDE_EFFECT_PROGRAM, "effects.js", "/tmp/log.ndjson");
    assert_eq!(
        output.code.matches("computePattern()").count(),
        SIDE_EFFECT_PROGRAM.matches("computePattern()").count()
    );
    assert!(output.code.contains("})(computePattern(), \"g\");"));
}

#[test]
fn same_line_sites_have_increasing_columns() {
    let output = instrument("f(/a/, new RegExp('b'), RegExp(c));", "line.js", "log");
    let columns: Vec<u32> = output.sites.iter().map(|s| s.location.column).collect();
    assert_eq!(columns, vec![2, 7, 24]);
}

#[test]
fn statement_leading_site_is_guarded() {
    let source = "const s = 'abc'\nRegExp(p).test(s) && hit()\n";
    let output = instrument(source, "asi.js", "log");
    assert!(output.code.contains("'abc'\n;(("));
}

#[test]
fn malformed_input_is_a_parse_error() {
    let err = InstrumentPipeline::default()
        .instrument_source("const re = /x/;\nfunction (", "broken.js", "log")
        .unwrap_err();
    match err {
        InstrumentError::Parse { file, line, .. } => {
            assert_eq!(file, "broken.js");
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn typescript_and_jsx_inputs() {
    let ts = "const re: RegExp = new RegExp(p as string);\n";
    let output = instrument(ts, "a.ts", "log");
    assert!(parses_cleanly(&output.code, LanguageId::TypeScript));

    let jsx = "const el = <input pattern={/\\d+/.source} />;\n";
    let output = instrument(jsx, "a.jsx", "log");
    assert_eq!(output.site_count(), 1);
    assert!(parses_cleanly(&output.code, LanguageId::Tsx));
}
