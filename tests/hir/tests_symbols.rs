#![allow(clippy::unwrap_used)]

use eoplus::hir::{
    ReferenceClassifier, ReferenceKind, SymbolCatalog, SymbolKind, ValueType, resolve, suggest,
};
use eoplus::parser::{NodeOrToken, SyntaxKind, parse};
use eoplus::{Caret, Flavor};
use rstest::rstest;

use crate::helpers::source_fixtures::{EOSERV_QUEST, OFFICIAL_QUEST};

// =============================================================================
// CATALOG
// =============================================================================

#[test]
fn test_catalog_collects_states_in_order() {
    let parse = parse(OFFICIAL_QUEST, Flavor::Official);
    let catalog = SymbolCatalog::build(&parse);
    assert_eq!(catalog.names(SymbolKind::State), vec!["Begin", "Reward", "Finish"]);

    let begin = &catalog.states()[0];
    assert_eq!(begin.description.as_deref(), Some("\"Talk to the farmer\""));
    assert_eq!(begin.declaration.text(), "Begin");
    assert!(catalog.states()[2].description.is_none());
}

#[test]
fn test_first_description_wins() {
    let parse = parse("state A { desc \"one\" desc \"two\" }", Flavor::Eoserv);
    let catalog = SymbolCatalog::build(&parse);
    assert_eq!(catalog.states()[0].description.as_deref(), Some("\"one\""));
}

#[test]
fn test_lookup_ignores_case() {
    let parse = parse("state Begin { }", Flavor::Eoserv);
    let catalog = SymbolCatalog::build(&parse);

    let state = catalog.lookup(SymbolKind::State, "BEGIN").unwrap();
    assert_eq!(state.name(), "Begin");
    let action = catalog.lookup(SymbolKind::Action, "setmap").unwrap();
    assert_eq!(action.name(), "SetMap");
    assert!(catalog.lookup(SymbolKind::Rule, "SetMap").is_none());
}

#[test]
fn test_duplicate_states_are_kept() {
    let parse = parse("state A { }\nstate a { }", Flavor::Eoserv);
    let catalog = SymbolCatalog::build(&parse);
    assert_eq!(catalog.states().len(), 2);
    assert_eq!(catalog.states_named("A").count(), 2);
    assert_eq!(catalog.lookup(SymbolKind::State, "a").unwrap().name(), "A");
}

#[rstest]
#[case(Flavor::Official, "AddNpcChat", true)]
#[case(Flavor::Eoserv, "AddNpcChat", true)]
#[case(Flavor::Official, "SetState", false)]
#[case(Flavor::Eoserv, "SetState", true)]
#[case(Flavor::Official, "Reset", true)]
#[case(Flavor::Eoserv, "Reset", true)]
fn test_builtin_actions_per_flavor(#[case] flavor: Flavor, #[case] name: &str, #[case] present: bool) {
    let catalog = SymbolCatalog::builtins(flavor);
    assert_eq!(catalog.lookup(SymbolKind::Action, name).is_some(), present);
}

#[test]
fn test_invocable_signature() {
    let catalog = SymbolCatalog::builtins(Flavor::Eoserv);
    let give_item = catalog
        .lookup(SymbolKind::Action, "GiveItem")
        .and_then(|symbol| symbol.as_invocable())
        .unwrap();
    assert_eq!(give_item.required_parameter_count(), 1);
    assert_eq!(give_item.parameters.len(), 2);
    assert_eq!(give_item.parameters[0].ty, ValueType::Integer);
    assert!(give_item.signature().starts_with("GiveItem(item_id: integer"));
}

// =============================================================================
// REFERENCE CLASSIFICATION
// =============================================================================

fn classify_identifiers(source: &str, flavor: Flavor) -> Vec<(String, Option<ReferenceKind>)> {
    let parse = parse(source, flavor);
    let classifier = ReferenceClassifier::new(flavor);
    parse
        .syntax()
        .descendants_with_tokens()
        .filter(|element| element.kind() == SyntaxKind::IDENT)
        .map(|element| {
            let text = element.as_token().map(|t| t.text().to_string()).unwrap_or_default();
            (text, classifier.classify(&element))
        })
        .collect()
}

#[test]
fn test_classify_official_references() {
    let classified = classify_identifiers(
        "state A { action Reset(); rule Always() goto B; }",
        Flavor::Official,
    );
    assert_eq!(
        classified,
        vec![
            ("A".to_string(), None),
            ("Reset".to_string(), Some(ReferenceKind::Action)),
            ("Always".to_string(), Some(ReferenceKind::Rule)),
            ("B".to_string(), Some(ReferenceKind::State)),
        ]
    );
}

#[test]
fn test_classify_eoserv_references() {
    let classified = classify_identifiers(
        "state A { if Always() Reset(); else End(); rule Always() goto B }",
        Flavor::Eoserv,
    );
    let kinds: Vec<_> = classified.into_iter().map(|(_, kind)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(ReferenceKind::Rule),
            Some(ReferenceKind::Action),
            Some(ReferenceKind::Action),
            Some(ReferenceKind::Rule),
            Some(ReferenceKind::State),
        ]
    );
}

// =============================================================================
// POSITION RESOLUTION
// =============================================================================

#[test]
fn test_resolve_identifier_prefix() {
    let parse = parse("main { }\nstate A { action SetMap(1, 2, 3) }", Flavor::Eoserv);
    let position = resolve(&parse, Caret::new(2, 20)).unwrap();
    assert_eq!(position.text, "Set");
    let NodeOrToken::Token(token) = position.element else {
        panic!("expected a token");
    };
    assert_eq!(token.text(), "SetMap");
}

#[test]
fn test_resolve_inside_eoserv_fixture() {
    let parse = parse(EOSERV_QUEST, Flavor::Eoserv);
    // "    rule TalkedToNpc(1) goto Patrol"
    let position = resolve(&parse, Caret::new(13, 14)).unwrap();
    assert_eq!(position.element.kind(), SyntaxKind::IDENT);
    assert_eq!(position.text, "Talke");
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

#[rstest]
#[case("Resett", Some("Reset"))]
#[case("givitem", Some("GiveItem"))]
#[case("Zzzzzzzz", None)]
fn test_suggest_action_names(#[case] name: &str, #[case] expected: Option<&str>) {
    let catalog = SymbolCatalog::builtins(Flavor::Eoserv);
    assert_eq!(suggest(name, catalog.names(SymbolKind::Action)), expected);
}

#[test]
fn test_suggest_skips_exact_match() {
    assert_eq!(suggest("Begin", ["Begin"]), None);
    assert_eq!(suggest("begin", ["Begin"]), Some("Begin"));
}
