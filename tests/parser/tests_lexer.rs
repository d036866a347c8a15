#![allow(clippy::unwrap_used)]

use eoplus::Flavor;
use eoplus::parser::{SyntaxKind, TokenStream, tokenize};
use rstest::rstest;

fn significant_kinds(input: &str, flavor: Flavor) -> Vec<SyntaxKind> {
    tokenize(input, flavor)
        .into_iter()
        .map(|lexeme| lexeme.kind)
        .filter(|kind| !kind.is_hidden())
        .collect()
}

#[rstest]
#[case("main", SyntaxKind::MAIN_KW)]
#[case("MAIN", SyntaxKind::MAIN_KW)]
#[case("State", SyntaxKind::STATE_KW)]
#[case("QuestName", SyntaxKind::QUESTNAME_KW)]
#[case("HIDDEN_END", SyntaxKind::HIDDEN_END_KW)]
#[case("Goto", SyntaxKind::GOTO_KW)]
#[case("world", SyntaxKind::WORLD_KW)]
fn test_keywords_ignore_case(#[case] input: &str, #[case] expected: SyntaxKind) {
    for flavor in Flavor::ALL {
        assert_eq!(significant_kinds(input, flavor), vec![expected], "{input} ({flavor})");
    }
}

#[rstest]
#[case("goal", SyntaxKind::GOAL_KW)]
#[case("if", SyntaxKind::IF_KW)]
#[case("ElseIf", SyntaxKind::ELSEIF_KW)]
#[case("else", SyntaxKind::ELSE_KW)]
fn test_conditional_keywords_depend_on_flavor(#[case] input: &str, #[case] eoserv: SyntaxKind) {
    assert_eq!(significant_kinds(input, Flavor::Eoserv), vec![eoserv]);
    assert_eq!(significant_kinds(input, Flavor::Official), vec![SyntaxKind::IDENT]);
}

#[rstest]
#[case("SetMap")]
#[case("mainly")]
#[case("states")]
#[case("_hidden")]
#[case("Npc2")]
fn test_keyword_prefixes_are_identifiers(#[case] input: &str) {
    assert_eq!(significant_kinds(input, Flavor::Eoserv), vec![SyntaxKind::IDENT]);
}

#[test]
fn test_invocation_tokens() {
    assert_eq!(
        significant_kinds("action GiveItem(1, \"two\");", Flavor::Official),
        vec![
            SyntaxKind::ACTION_KW,
            SyntaxKind::IDENT,
            SyntaxKind::L_PAREN,
            SyntaxKind::INTEGER,
            SyntaxKind::COMMA,
            SyntaxKind::STRING,
            SyntaxKind::R_PAREN,
            SyntaxKind::SEMICOLON,
        ]
    );
}

#[test]
fn test_comments_are_hidden() {
    let kinds: Vec<_> = tokenize("// line\nstate /* inline */ A", Flavor::Eoserv)
        .into_iter()
        .map(|lexeme| lexeme.kind)
        .collect();
    assert_eq!(kinds[0], SyntaxKind::LINE_COMMENT);
    assert!(kinds.contains(&SyntaxKind::BLOCK_COMMENT));
    assert_eq!(
        significant_kinds("// line\nstate /* inline */ A", Flavor::Eoserv),
        vec![SyntaxKind::STATE_KW, SyntaxKind::IDENT]
    );
}

#[test]
fn test_stream_lines_and_columns() {
    let (stream, errors) = TokenStream::lex("main\n{\n  questname \"Q\"\n}", Flavor::Official);
    assert!(errors.is_empty());

    let questname = stream
        .iter()
        .find(|token| token.kind == SyntaxKind::QUESTNAME_KW)
        .unwrap();
    assert_eq!((questname.line, questname.column), (3, 2));
    assert_eq!(questname.span().start.line, 2);

    let last = stream.iter().last().unwrap();
    assert!(last.is_eof());
    assert_eq!(last.index, stream.len() - 1);
}

#[test]
fn test_columns_count_characters() {
    let (stream, _) = TokenStream::lex("desc \"héllo\" x", Flavor::Official);
    let ident = stream.iter().find(|token| token.kind == SyntaxKind::IDENT).unwrap();
    assert_eq!(ident.column, 13);
}

#[test]
fn test_lex_errors_are_collected() {
    let (stream, errors) = TokenStream::lex("state A { $ }", Flavor::Eoserv);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "$");
    assert_eq!(errors[0].column, 10);
    assert!(stream.iter().any(|token| token.kind == SyntaxKind::ERROR));
}

#[test]
fn test_unterminated_string_stops_at_line_end() {
    let (_, errors) = TokenStream::lex("desc \"open\nstate", Flavor::Official);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "\"open");
}
