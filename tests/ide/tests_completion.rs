//! Completion and signature help tests.

#![allow(clippy::unwrap_used)]

use eoplus::ide::CompletionKind;
use eoplus::{Analysis, Flavor, Position};
use rstest::rstest;

fn labels(source: &str, flavor: Flavor, position: Position) -> Vec<String> {
    Analysis::new(source, flavor)
        .completions(position)
        .into_iter()
        .map(|item| item.label.to_string())
        .collect()
}

// =============================================================================
// KEYWORDS
// =============================================================================

#[rstest]
#[case::top_level_whitespace("main { }  ", Flavor::Eoserv, Position::new(0, 9), &["main", "state"])]
#[case::official_statements(
    "main { }\nstate A {  }",
    Flavor::Official,
    Position::new(1, 10),
    &["desc", "rule", "action"]
)]
#[case::eoserv_statements(
    "main { }\nstate A {  }",
    Flavor::Eoserv,
    Position::new(1, 10),
    &["desc", "rule", "goal", "if", "elseif", "else", "action"]
)]
#[case::official_goto("state A { rule Always() go }", Flavor::Official, Position::new(0, 26), &["goto"])]
#[case::typed_block_keyword("mai", Flavor::Eoserv, Position::new(0, 3), &["main"])]
fn test_keyword_completions(
    #[case] source: &str,
    #[case] flavor: Flavor,
    #[case] position: Position,
    #[case] expected: &[&str],
) {
    assert_eq!(labels(source, flavor, position), expected);
}

#[test]
fn test_keywords_have_keyword_kind() {
    let items = Analysis::new("sta", Flavor::Official).completions(Position::new(0, 3));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, CompletionKind::Keyword);
    assert_eq!(items[0].kind.to_lsp(), 14);
}

#[test]
fn test_reserved_keywords_are_never_offered() {
    let items = labels("main { }  ", Flavor::Eoserv, Position::new(0, 9));
    assert!(!items.is_empty());
    for reserved in ["character", "npc", "map", "world"] {
        assert!(!items.iter().any(|label| label == reserved));
    }
}

// =============================================================================
// SYMBOLS
// =============================================================================

#[test]
fn test_state_completions_after_goto() {
    let source = "main { }\nstate Alpha { }\nstate Beta { rule Always() goto Al }";
    let analysis = Analysis::new(source, Flavor::Eoserv);
    let items = analysis.completions(Position::new(2, 34));

    assert_eq!(items.len(), 1);
    assert_eq!(&*items[0].label, "Alpha");
    assert_eq!(items[0].kind, CompletionKind::Module);
    assert_eq!(items[0].detail.as_deref(), Some("(state) Alpha"));
}

#[test]
fn test_rule_completions_in_condition() {
    let items = labels("state A { rule Alw }", Flavor::Eoserv, Position::new(0, 18));
    assert_eq!(items.first().map(String::as_str), Some("Always"));
}

#[test]
fn test_action_completions_follow_flavor() {
    let official = labels("state A { action SetSt }", Flavor::Official, Position::new(0, 22));
    let eoserv = labels("state A { action SetSt }", Flavor::Eoserv, Position::new(0, 22));
    assert!(!official.iter().any(|label| label == "SetState"));
    assert!(eoserv.iter().any(|label| label == "SetState"));
}

#[test]
fn test_action_documentation_is_attached() {
    let analysis = Analysis::new("state A { action ShowH }", Flavor::Eoserv);
    let items = analysis.completions(Position::new(0, 22));
    let show_hint = items.iter().find(|item| &*item.label == "ShowHint").unwrap();
    assert_eq!(show_hint.kind, CompletionKind::Function);
    assert_eq!(show_hint.detail.as_deref(), Some("(action) ShowHint(message: string)"));
    assert_eq!(
        show_hint.documentation.as_deref(),
        Some("Displays a message to the player as a hint.")
    );
}

#[test]
fn test_no_completions_inside_literals() {
    let items = labels("state A { desc \"Hello\" }", Flavor::Eoserv, Position::new(0, 18));
    assert!(items.is_empty());
}

// =============================================================================
// SIGNATURE HELP
// =============================================================================

#[rstest]
#[case(Position::new(1, 26), 0)]
#[case(Position::new(1, 29), 1)]
fn test_signature_help_tracks_argument(#[case] position: Position, #[case] active: u32) {
    let analysis = Analysis::new("main { }\nstate A { action GiveItem(1, 2) }", Flavor::Eoserv);
    let help = analysis.signature_help(position).unwrap();

    assert_eq!(help.active_signature, 0);
    assert_eq!(help.active_parameter, active);
    let signature = &help.signatures[0];
    assert_eq!(signature.label, "GiveItem(item_id: integer, amount?: integer)");
    let parameters: Vec<_> = signature.parameters.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(parameters, vec!["item_id: integer", "amount?: integer"]);
}

#[test]
fn test_signature_help_ends_at_closing_paren() {
    let analysis = Analysis::new("main { }\nstate A { action GiveItem(1, 2) }", Flavor::Eoserv);
    assert!(analysis.signature_help(Position::new(1, 31)).is_none());
    assert!(analysis.signature_help(Position::new(1, 12)).is_none());
}

#[test]
fn test_signature_help_for_official_rule() {
    let analysis = Analysis::new("state A { rule EnterMap(1) goto A }", Flavor::Official);
    let help = analysis.signature_help(Position::new(0, 24)).unwrap();
    assert!(help.signatures[0].label.starts_with("EnterMap("));
}
