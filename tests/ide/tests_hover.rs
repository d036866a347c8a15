//! Hover feature tests for the IDE layer.

#![allow(clippy::unwrap_used)]

use eoplus::{Analysis, Flavor, Position, Span};

use crate::helpers::source_fixtures::OFFICIAL_QUEST;

fn official() -> Analysis {
    Analysis::new(OFFICIAL_QUEST, Flavor::Official)
}

#[test]
fn test_hover_on_goto_target_shows_state() {
    // "    rule TalkedToNpc(1) goto Reward;"
    let hover = official().hover(Position::new(10, 31)).unwrap();
    assert_eq!(
        hover.contents,
        "```\n(state) Reward\n```\n```\n\"Collect the reward\"\n```"
    );
    assert_eq!(hover.range, Span::from_coords(10, 29, 10, 35));
}

#[test]
fn test_hover_on_state_declaration() {
    let hover = official().hover(Position::new(21, 8)).unwrap();
    assert_eq!(hover.contents, "```\n(state) Finish\n```");
}

#[test]
fn test_hover_on_action_shows_signature_and_parameters() {
    // "    action GiveItem(1, 100);"
    let hover = official().hover(Position::new(16, 12)).unwrap();
    assert!(hover.contents.starts_with(
        "```\n(action) GiveItem(item_id: integer, amount?: integer)\n```\n---\nAdds an item to the player's inventory."
    ));
    assert!(hover.contents.contains("`amount` *(optional)*"));
    assert_eq!(hover.range, Span::from_coords(16, 11, 16, 19));
}

#[test]
fn test_hover_on_rule() {
    let hover = official().hover(Position::new(10, 12)).unwrap();
    assert!(
        hover.contents.starts_with("```\n(rule) TalkedToNpc(behavior_id: integer)\n```"),
        "{}",
        hover.contents
    );
}

#[test]
fn test_hover_uses_declared_casing() {
    let analysis = Analysis::new("state A { action showhint(\"x\") }", Flavor::Eoserv);
    let hover = analysis.hover(Position::new(0, 20)).unwrap();
    assert!(hover.contents.contains("(action) ShowHint(message: string)"));
}

#[test]
fn test_no_hover_on_keywords_literals_or_whitespace() {
    let analysis = official();
    assert!(analysis.hover(Position::new(10, 5)).is_none());
    assert!(analysis.hover(Position::new(16, 24)).is_none());
    assert!(analysis.hover(Position::new(5, 0)).is_none());
}

#[test]
fn test_no_hover_on_unknown_names() {
    let analysis = Analysis::new("state A { action Nope() }", Flavor::Eoserv);
    assert!(analysis.hover(Position::new(0, 19)).is_none());
}
