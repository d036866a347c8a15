//! Translation of lexer and parser errors into diagnostics.

use super::Diagnostic;
use crate::base::Span;
use crate::parser::{Parse, ParseError, ParseErrorKind, SyntaxKind};

/// Lexer and parser diagnostics, ordered by position
pub fn syntax_diagnostics(parse: &Parse) -> Vec<Diagnostic> {
    let lexical = parse
        .lex_errors()
        .iter()
        .map(|error| (u32::from(error.offset), lexer_diagnostic(&error.text, error.span())));
    let syntactic = parse.errors().iter().filter_map(|error| {
        let offset = parse.tokens().get(error.offending)?.offset;
        Some((u32::from(offset), parser_diagnostic(parse, error)?))
    });

    let mut merged: Vec<(u32, Diagnostic)> = lexical.chain(syntactic).collect();
    // Stable: a lexer error sorts before a parser error at the same offset
    merged.sort_by_key(|(offset, _)| *offset);
    merged.into_iter().map(|(_, diagnostic)| diagnostic).collect()
}

pub fn lexer_diagnostics(parse: &Parse) -> Vec<Diagnostic> {
    parse
        .lex_errors()
        .iter()
        .map(|error| lexer_diagnostic(&error.text, error.span()))
        .collect()
}

pub fn parser_diagnostics(parse: &Parse) -> Vec<Diagnostic> {
    parse
        .errors()
        .iter()
        .filter_map(|error| parser_diagnostic(parse, error))
        .collect()
}

fn lexer_diagnostic(text: &str, range: Span) -> Diagnostic {
    let message = if text.starts_with('"') {
        "Unterminated string literal."
    } else {
        "Invalid input."
    };
    Diagnostic::error(range, message)
}

fn parser_diagnostic(parse: &Parse, error: &ParseError) -> Option<Diagnostic> {
    let tokens = parse.tokens();
    let mut offending = tokens.get(error.offending)?;
    if offending.is_eof() {
        if let Some(previous) = tokens.previous_significant(error.offending) {
            offending = previous;
        }
    }

    let wrong_text = if offending.text.starts_with('\'') {
        format!("\"{}\"", offending.text)
    } else {
        format!("'{}'", offending.text)
    };

    let expected = expected_text(error);
    let message = if error.kind == ParseErrorKind::Missing || !expected.contains(',') {
        format!("{} expected.", capitalize(&expected))
    } else {
        format!("Extraneous input {wrong_text} found (expecting {expected}).")
    };

    tracing::trace!(?error, %message, "translated syntax error");

    Some(Diagnostic::error(offending.span(), message))
}

/// Human phrasing of the expected token set
fn expected_text(error: &ParseError) -> String {
    let text = error
        .expected
        .iter()
        .filter(|&&kind| kind != SyntaxKind::EOF)
        .filter_map(|&kind| expected_name(kind))
        .filter(|name| !matches!(name.as_str(), "'character'" | "'npc'" | "'map'" | "'world'" | "';'"))
        .collect::<Vec<_>>()
        .join(", ");

    let lowercase = text.to_lowercase();
    if text.contains("'questname'") {
        "attribute name".to_string()
    } else if text.contains("'desc'") {
        "statement".to_string()
    } else if text.contains("'goto'") && text.contains("identifier") {
        "expression".to_string()
    } else if lowercase.contains("string")
        && lowercase.contains("integer")
        && error.within(SyntaxKind::ARGUMENT_LIST)
    {
        "argument expression".to_string()
    } else {
        text
    }
}

fn expected_name(kind: SyntaxKind) -> Option<String> {
    let name = kind.display_name()?.trim_end_matches('_');
    let name = match name {
        "IntegerLiteral" => "integer".to_string(),
        "StringLiteral" => "string".to_string(),
        "Identifier" => "identifier".to_string(),
        _ if kind.is_keyword() => format!("'{}'", name.to_lowercase()),
        _ => name.to_string(),
    };
    Some(name)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
