//! Logos-based lexer for EO+
//!
//! Keywords are matched case-insensitively. The dialect decides which words
//! are keywords: the Official flavor has no conditional statements, so
//! `goal`, `if`, `elseif` and `else` lex as plain identifiers there.

use super::syntax_kind::SyntaxKind;
use crate::base::Flavor;
use logos::Logos;
use text_size::TextSize;

/// A raw lexeme with its kind, text and byte offset.
///
/// Unrecognised input comes out as [`SyntaxKind::ERROR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    flavor: Flavor,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, flavor: Flavor) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            flavor,
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => dialect_kind(t.into(), self.flavor),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Lexeme { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str, flavor: Flavor) -> Vec<Lexeme<'_>> {
    Lexer::new(input, flavor).collect()
}

fn dialect_kind(kind: SyntaxKind, flavor: Flavor) -> SyntaxKind {
    match (flavor, kind) {
        (
            Flavor::Official,
            SyntaxKind::GOAL_KW | SyntaxKind::IF_KW | SyntaxKind::ELSEIF_KW | SyntaxKind::ELSE_KW,
        ) => SyntaxKind::IDENT,
        _ => kind,
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("main", ignore(ascii_case))]
    MainKw,
    #[token("state", ignore(ascii_case))]
    StateKw,
    #[token("questname", ignore(ascii_case))]
    QuestnameKw,
    #[token("version", ignore(ascii_case))]
    VersionKw,
    #[token("hidden", ignore(ascii_case))]
    HiddenKw,
    #[token("hidden_end", ignore(ascii_case))]
    HiddenEndKw,
    #[token("disabled", ignore(ascii_case))]
    DisabledKw,
    #[token("desc", ignore(ascii_case))]
    DescKw,
    #[token("rule", ignore(ascii_case))]
    RuleKw,
    #[token("action", ignore(ascii_case))]
    ActionKw,
    #[token("goal", ignore(ascii_case))]
    GoalKw,
    #[token("if", ignore(ascii_case))]
    IfKw,
    #[token("elseif", ignore(ascii_case))]
    ElseifKw,
    #[token("else", ignore(ascii_case))]
    ElseKw,
    #[token("goto", ignore(ascii_case))]
    GotoKw,
    #[token("character", ignore(ascii_case))]
    CharacterKw,
    #[token("npc", ignore(ascii_case))]
    NpcKw,
    #[token("map", ignore(ascii_case))]
    MapKw,
    #[token("world", ignore(ascii_case))]
    WorldKw,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    String,

    /// A string literal cut short by a line break or end of input
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Keywords
            MainKw => SyntaxKind::MAIN_KW,
            StateKw => SyntaxKind::STATE_KW,
            QuestnameKw => SyntaxKind::QUESTNAME_KW,
            VersionKw => SyntaxKind::VERSION_KW,
            HiddenKw => SyntaxKind::HIDDEN_KW,
            HiddenEndKw => SyntaxKind::HIDDEN_END_KW,
            DisabledKw => SyntaxKind::DISABLED_KW,
            DescKw => SyntaxKind::DESC_KW,
            RuleKw => SyntaxKind::RULE_KW,
            ActionKw => SyntaxKind::ACTION_KW,
            GoalKw => SyntaxKind::GOAL_KW,
            IfKw => SyntaxKind::IF_KW,
            ElseifKw => SyntaxKind::ELSEIF_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            GotoKw => SyntaxKind::GOTO_KW,
            CharacterKw => SyntaxKind::CHARACTER_KW,
            NpcKw => SyntaxKind::NPC_KW,
            MapKw => SyntaxKind::MAP_KW,
            WorldKw => SyntaxKind::WORLD_KW,

            // Punctuation
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            Comma => SyntaxKind::COMMA,
            Semicolon => SyntaxKind::SEMICOLON,

            // Literals
            Integer => SyntaxKind::INTEGER,
            String => SyntaxKind::STRING,
            UnterminatedString => SyntaxKind::ERROR,
            Ident => SyntaxKind::IDENT,
        }
    }
}
