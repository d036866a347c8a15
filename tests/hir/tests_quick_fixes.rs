#![allow(clippy::unwrap_used)]

use eoplus::{Flavor, QuickFixes};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;

#[rstest]
#[case::add_main("state Begin { }", "'main' block is missing.", "main\n{\n\n}\n\nstate Begin { }")]
#[case::add_main_keeps_indent(
    "  state Begin { }",
    "'main' block is missing.",
    "main\n{\n\n}\n\n  state Begin { }"
)]
#[case::remove_main("main { }\nmain { }", "Cannot redeclare 'main' block.", "main { }\n")]
#[case::remove_attribute(
    "main { questname \"A\" questname \"B\" }",
    "Cannot specify multiple 'questname' attributes.",
    "main { questname \"A\"  }"
)]
#[case::remove_desc(
    "main { }\nstate A { desc \"x\" desc \"y\" }",
    "Cannot specify multiple state descriptions.",
    "main { }\nstate A { desc \"x\"  }"
)]
#[case::spelling(
    "main { }\nstate A { action Resett() }",
    "Cannot find action 'Resett'. Did you mean 'Reset'?",
    "main { }\nstate A { action Reset() }"
)]
#[case::reference_casing(
    "main { }\nstate A { action showhint(\"x\") }",
    "Name reference casing should match declaration ('ShowHint').",
    "main { }\nstate A { action ShowHint(\"x\") }"
)]
#[case::state_casing(
    "main { }\nstate MyState { rule Always() goto mystate }",
    "Name reference casing should match declaration ('MyState').",
    "main { }\nstate MyState { rule Always() goto MyState }"
)]
#[case::keyword_casing("MAIN { }", "Keywords should be lowercase.", "main { }")]
#[case::add_state(
    "main { }\nstate A { rule Always() goto B }",
    "Cannot find state 'B'.",
    "main { }\nstate A { rule Always() goto B }\n\nstate B\n{\n\n}"
)]
fn test_fix_applies(#[case] source: &str, #[case] message: &str, #[case] expected: &str) {
    assert_eq!(apply_fix(source, Flavor::Eoserv, message), expected);
}

#[rstest]
#[case("state Begin { }", "'main' block is missing.")]
#[case("main { }\nstate A { action Resett() }", "Cannot find action 'Resett'. Did you mean 'Reset'?")]
#[case("main { }\nstate A { rule Always() goto B }", "Cannot find state 'B'.")]
#[case("MAIN { }", "Keywords should be lowercase.")]
#[case(
    "main { }\nstate MyState { rule Always() goto mystate }",
    "Name reference casing should match declaration ('MyState')."
)]
fn test_fixed_document_is_clean(#[case] source: &str, #[case] message: &str) {
    let fixed = apply_fix(source, Flavor::Eoserv, message);
    assert_clean(&fixed, Flavor::Eoserv);
}

#[test]
fn test_missing_main_fix_is_not_preferred() {
    let diagnostic = find_diagnostic("state Begin { }", Flavor::Eoserv, "'main' block is missing.");
    assert_eq!(diagnostic.fixes.len(), 1);
    assert!(diagnostic.fixes.preferred().is_none());
}

#[test]
fn test_misspelled_state_offers_two_fixes() {
    let diagnostic = find_diagnostic(
        "main { }\nstate Begin { rule Always() goto Begn }",
        Flavor::Eoserv,
        "Cannot find state 'Begn'. Did you mean 'Begin'?",
    );
    let QuickFixes::MultipleFixes(fixes) = &diagnostic.fixes else {
        panic!("expected two fixes, got {:?}", diagnostic.fixes);
    };
    let titles: Vec<_> = fixes.iter().map(|fix| fix.title.as_str()).collect();
    assert_eq!(titles, vec!["Change spelling to 'Begin'", "Add missing state 'Begn'"]);
    assert_eq!(
        diagnostic.fixes.preferred().map(|fix| fix.title.as_str()),
        Some("Change spelling to 'Begin'")
    );
}

#[rstest]
#[case::misspelled_action("main { }\nstate A { action Resett() }", "Cannot find action 'Resett'. Did you mean 'Reset'?")]
#[case::misspelled_rule("main { }\nstate A { rule Alwayz() goto A }", "Cannot find rule 'Alwayz'. Did you mean 'Always'?")]
fn test_invocable_misspelling_offers_only_spelling_fix(#[case] source: &str, #[case] message: &str) {
    let diagnostic = find_diagnostic(source, Flavor::Eoserv, message);
    let titles: Vec<_> = diagnostic.fixes.iter().map(|fix| fix.title.as_str()).collect();
    assert_eq!(titles.len(), 1, "{titles:?}");
    assert!(titles[0].starts_with("Change spelling to"));
}

#[test]
fn test_unknown_action_has_no_fix() {
    let source = "main { }\nstate A { action Nope() }";
    let diagnostic = find_diagnostic(source, Flavor::Eoserv, "Cannot find action 'Nope'.");
    assert!(diagnostic.fixes.is_empty(), "{:?}", diagnostic.fixes);
    assert!(diagnostic.fixes.preferred().is_none());
}

#[test]
fn test_unknown_state_prefers_adding_it() {
    let diagnostic = find_diagnostic(
        "main { }\nstate A { rule Always() goto B }",
        Flavor::Eoserv,
        "Cannot find state 'B'.",
    );
    assert_eq!(
        diagnostic.fixes.preferred().map(|fix| fix.title.as_str()),
        Some("Add missing state 'B'")
    );
}

#[test]
fn test_warnings_without_fixes() {
    let diagnostic = find_diagnostic(
        "main { }\nstate A { action SetState(\"A\") }",
        Flavor::Eoserv,
        "'goto' expressions should be preferred over 'SetState'.",
    );
    assert!(diagnostic.fixes.is_empty());
}
