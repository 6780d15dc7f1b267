//! Property-based tests over generated programs
//!
//! Programs are built by joining statements from fixed pools, so every
//! generated program is valid JavaScript with a known site count.

mod common;

use common::*;
use proptest::prelude::*;
use regex_instrument::features::parsing::LanguageId;

fn plain_program() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PLAIN_STATEMENTS), 0..12)
        .prop_map(|stmts| stmts.join("\n"))
}

fn mixed_program() -> impl Strategy<Value = (String, usize)> {
    let statement = prop_oneof![
        prop::sample::select(PLAIN_STATEMENTS).prop_map(|s| (s, 0usize)),
        prop::sample::select(REGEX_STATEMENTS),
    ];
    prop::collection::vec(statement, 1..12).prop_map(|stmts| {
        let sites: usize = stmts.iter().map(|(_, n)| n).sum();
        let text = stmts.iter().map(|(s, _)| *s).collect::<Vec<_>>().join("\n");
        (text, sites)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_no_sites_is_identity(source in plain_program(), trailing_newline in any::<bool>()) {
        let source = if trailing_newline { source + "\n" } else { source };
        let output = instrument(&source, "plain.js", "log.ndjson");
        prop_assert_eq!(output.code, source);
    }

    #[test]
    fn prop_fragments_match_sites((source, sites) in mixed_program()) {
        let output = instrument(&source, "mixed.js", "log.ndjson");
        prop_assert_eq!(output.site_count(), sites);
        prop_assert_eq!(fragment_count(&output.code), sites);
    }

    #[test]
    fn prop_output_reparses_with_same_lines((source, _) in mixed_program()) {
        let output = instrument(&source, "mixed.js", "log.ndjson");
        prop_assert!(parses_cleanly(&output.code, LanguageId::JavaScript));
        prop_assert_eq!(output.code.lines().count(), source.lines().count());
    }
}
