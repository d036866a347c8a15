//! Buffered token stream with line/column bookkeeping.
//!
//! Every lexeme becomes a [`Token`]. Trivia and the text of lexical errors
//! stay in the stream on the hidden channel, so the parser never sees them
//! but the tree still covers every byte. The stream always ends with an
//! `EOF` token.

use text_size::TextSize;
use smol_str::SmolStr;

use super::lexer::Lexer;
use super::syntax_kind::SyntaxKind;
use crate::base::{Flavor, Position, Span};

/// A token in the buffered stream.
///
/// `line` is 1-based and `column` is 0-based, counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub text: SmolStr,
    pub offset: TextSize,
    pub line: u32,
    pub column: u32,
    pub index: usize,
}

impl Token {
    /// Hidden-channel tokens (whitespace, comments and lexical errors).
    pub fn is_hidden(&self) -> bool {
        self.kind.is_hidden()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == SyntaxKind::EOF
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> u32 {
        self.text.chars().count() as u32
    }

    /// Editor range of the token: `(line - 1, column)` to
    /// `(line - 1, column + len)`.
    pub fn span(&self) -> Span {
        let line = self.line.saturating_sub(1);
        Span::new(
            Position::new(line, self.column),
            Position::new(line, self.column + self.char_len()),
        )
    }
}

/// Input the lexer could not turn into a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub text: SmolStr,
    pub offset: TextSize,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn span(&self) -> Span {
        let line = self.line.saturating_sub(1);
        let len = self.text.chars().count() as u32;
        Span::new(
            Position::new(line, self.column),
            Position::new(line, self.column + len),
        )
    }
}

/// All tokens of one document, hidden channel included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Lex `input` into a stream, collecting lexical errors separately.
    pub fn lex(input: &str, flavor: Flavor) -> (Self, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        let mut line = 1u32;
        let mut column = 0u32;

        for lexeme in Lexer::new(input, flavor) {
            if lexeme.kind == SyntaxKind::ERROR {
                errors.push(LexError {
                    text: lexeme.text.into(),
                    offset: lexeme.offset,
                    line,
                    column,
                });
            }
            tokens.push(Token {
                kind: lexeme.kind,
                text: lexeme.text.into(),
                offset: lexeme.offset,
                line,
                column,
                index: tokens.len(),
            });

            for ch in lexeme.text.chars() {
                if ch == '\n' {
                    line += 1;
                    column = 0;
                } else {
                    column += 1;
                }
            }
        }

        tokens.push(Token {
            kind: SyntaxKind::EOF,
            text: SmolStr::new_static("<EOF>"),
            offset: TextSize::of(input),
            line,
            column,
            index: tokens.len(),
        });

        (Self { tokens }, errors)
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// The first default-channel token that is not `EOF`.
    pub fn first_meaningful(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| !t.is_hidden() && !t.is_eof())
    }

    /// The closest default-channel token before `index`.
    pub fn previous_significant(&self, index: usize) -> Option<&Token> {
        self.tokens[..index.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|t| !t.is_hidden())
    }

    /// Find the stream token starting at `offset`.
    pub fn index_at_offset(&self, offset: TextSize) -> Option<usize> {
        self.tokens.binary_search_by(|t| t.offset.cmp(&offset)).ok()
    }
}
