//! Semantic token tests.

use eoplus::ide::{TokenModifiers, TokenType, encode};
use eoplus::{Analysis, Flavor};

use crate::helpers::source_fixtures::OFFICIAL_QUEST;

#[test]
fn test_official_fixture_tokens() {
    let analysis = Analysis::new(OFFICIAL_QUEST, Flavor::Official);
    let tokens = analysis.semantic_tokens();

    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.line, t.col, t.length, t.token_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            (6, 6, 5, TokenType::Type),
            (9, 11, 10, TokenType::Method),
            (10, 9, 11, TokenType::Method),
            (10, 29, 6, TokenType::Type),
            (13, 6, 6, TokenType::Type),
            (16, 11, 8, TokenType::Method),
            (17, 11, 8, TokenType::Method),
            (18, 9, 6, TokenType::Method),
            (18, 23, 6, TokenType::Type),
            (21, 6, 6, TokenType::Type),
            (23, 11, 3, TokenType::Method),
        ]
    );

    let declarations = tokens
        .iter()
        .filter(|t| t.modifiers == TokenModifiers::DECLARATION)
        .count();
    assert_eq!(declarations, 3);
}

#[test]
fn test_encoded_tokens_are_relative() {
    let analysis = Analysis::new(OFFICIAL_QUEST, Flavor::Official);
    let data = encode(&analysis.semantic_tokens());

    assert_eq!(data.len(), 11 * 5);
    assert_eq!(&data[..10], &[6, 6, 5, 0, 1, 3, 11, 10, 1, 0]);
    // second token on line 10 is relative to the first one
    assert_eq!(&data[15..20], &[0, 20, 6, 0, 0]);
}

#[test]
fn test_legends() {
    assert_eq!(TokenType::LEGEND, &["type", "method"]);
    assert_eq!(TokenModifiers::LEGEND, &["declaration"]);
    assert_eq!(TokenType::Method.to_lsp_index(), 1);
}

#[test]
fn test_keywords_and_literals_are_not_tokens() {
    let analysis = Analysis::new("main { questname \"Q\" }", Flavor::Eoserv);
    assert!(analysis.semantic_tokens().is_empty());
}
