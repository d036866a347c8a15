//! Go-to-definition, find-references and rename tests.

#![allow(clippy::unwrap_used)]

use eoplus::ide::RenameError;
use eoplus::{Analysis, Flavor, Position, Span, TextEdit};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::assert_clean;
use crate::helpers::source_fixtures::{EOSERV_QUEST, OFFICIAL_QUEST};

fn official() -> Analysis {
    Analysis::new(OFFICIAL_QUEST, Flavor::Official)
}

// =============================================================================
// GOTO DEFINITION
// =============================================================================

#[rstest]
#[case::from_reference(Position::new(10, 31))]
#[case::from_declaration(Position::new(13, 8))]
fn test_goto_reward_state(#[case] position: Position) {
    let target = official().goto_definition(position).unwrap();
    assert_eq!(target.selection_range, Span::from_coords(13, 6, 13, 12));
    assert_eq!(target.range, Span::from_coords(13, 0, 19, 1));
}

#[test]
fn test_goto_peek_is_capped() {
    let mut source = String::from("main { }\nstate Long\n{\n");
    for _ in 0..10 {
        source.push_str("  action Reset();\n");
    }
    source.push_str("  rule Always() goto Long\n}\n");
    let analysis = Analysis::new(&source, Flavor::Eoserv);

    let target = analysis.goto_definition(Position::new(13, 23)).unwrap();
    assert_eq!(target.range, Span::from_coords(1, 0, 8, 255));
    assert_eq!(target.selection_range, Span::from_coords(1, 6, 1, 10));
}

#[test]
fn test_goto_builtins_and_keywords_have_no_definition() {
    let analysis = official();
    assert!(analysis.goto_definition(Position::new(16, 12)).is_none());
    assert!(analysis.goto_definition(Position::new(10, 12)).is_none());
    assert!(analysis.goto_definition(Position::new(10, 25)).is_none());
}

#[test]
fn test_goto_unknown_state() {
    let analysis = Analysis::new("state A { rule Always() goto Nowhere }", Flavor::Eoserv);
    assert!(analysis.goto_definition(Position::new(0, 31)).is_none());
}

// =============================================================================
// FIND REFERENCES
// =============================================================================

#[test]
fn test_references_include_declaration_last() {
    let references = official().find_references(Position::new(13, 8), true);
    assert_eq!(
        references,
        vec![
            Span::from_coords(10, 29, 10, 35),
            Span::from_coords(13, 6, 13, 12),
        ]
    );
}

#[test]
fn test_references_without_declaration() {
    let references = official().find_references(Position::new(18, 24), false);
    assert_eq!(references, vec![Span::from_coords(18, 23, 18, 29)]);
}

#[test]
fn test_references_ignore_case() {
    let source = "main { }\nstate Patrol { rule Always() goto patrol }\nstate B { rule Always() goto PATROL }";
    let analysis = Analysis::new(source, Flavor::Eoserv);
    let references = analysis.find_references(Position::new(1, 8), false);
    assert_eq!(references.len(), 2);
}

#[test]
fn test_references_on_action_are_empty() {
    assert!(official().find_references(Position::new(16, 12), true).is_empty());
}

// =============================================================================
// RENAME
// =============================================================================

#[rstest]
#[case::action(Position::new(16, 12), RenameError::Action, 1003)]
#[case::rule(Position::new(10, 12), RenameError::Rule, 1002)]
#[case::keyword(Position::new(8, 5), RenameError::Element, 1001)]
fn test_prepare_rename_rejects(#[case] position: Position, #[case] error: RenameError, #[case] code: i32) {
    let result = official().prepare_rename(position);
    assert_eq!(result, Err(error));
    assert_eq!(error.code(), code);
}

#[test]
fn test_prepare_rename_error_messages() {
    assert_eq!(RenameError::Rule.to_string(), "You cannot rename rules.");
    assert_eq!(RenameError::Action.to_string(), "You cannot rename actions.");
    assert_eq!(RenameError::Element.to_string(), "You cannot rename this element.");
}

#[test]
fn test_prepare_rename_on_state_keyword_selects_name() {
    let range = official().prepare_rename(Position::new(13, 2)).unwrap();
    assert_eq!(range, Span::from_coords(13, 6, 13, 12));
}

#[test]
fn test_rename_state_everywhere() {
    let analysis = official();
    let edits = analysis.rename(Position::new(10, 31), "Payout").unwrap();
    assert_eq!(edits.len(), 2);

    let renamed = TextEdit::apply_all(OFFICIAL_QUEST, &edits);
    assert!(renamed.contains("goto Payout;"));
    assert!(renamed.contains("state Payout\n"));
    assert!(!renamed.contains("Reward\n"));
    assert_clean(&renamed, Flavor::Official);
}

#[test]
fn test_rename_self_referencing_state() {
    // "    rule EnterCoord(5, 10, 10) goto Patrol"
    let analysis = Analysis::new(EOSERV_QUEST, Flavor::Eoserv);
    let edits = analysis.rename(Position::new(20, 38), "Watch").unwrap();
    assert_eq!(edits.len(), 3);

    let renamed = TextEdit::apply_all(EOSERV_QUEST, &edits);
    assert_clean(&renamed, Flavor::Eoserv);
}

#[test]
fn test_rename_action_is_refused() {
    assert!(official().rename(Position::new(16, 12), "Other").is_none());
}
