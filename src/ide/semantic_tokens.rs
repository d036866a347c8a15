//! Semantic tokens: highlighting based on reference classification.
//!
//! Only identifiers are reported. Keywords, literals and comments are left to
//! the editor's grammar.

use super::analysis::{Analysis, is_state_declaration};
use super::references::identifiers;
use crate::hir::SymbolKind;

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Type,
    Method,
}

impl TokenType {
    /// Legend order, as announced to the editor
    pub const LEGEND: &'static [&'static str] = &["type", "method"];

    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Type => 0,
            TokenType::Method => 1,
        }
    }
}

impl From<SymbolKind> for TokenType {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Rule | SymbolKind::Action => TokenType::Method,
            SymbolKind::State => TokenType::Type,
        }
    }
}

/// Token modifier bit set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenModifiers(u32);

impl TokenModifiers {
    pub const LEGEND: &'static [&'static str] = &["declaration"];

    pub const NONE: Self = Self(0);
    pub const DECLARATION: Self = Self(1 << 0);

    pub fn bits(self) -> u32 {
        self.0
    }
}

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticToken {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub col: u32,
    /// Length of the token in characters
    pub length: u32,
    pub token_type: TokenType,
    pub modifiers: TokenModifiers,
}

/// Semantic tokens of a document in order.
pub fn semantic_tokens(analysis: &Analysis) -> Vec<SemanticToken> {
    identifiers(analysis)
        .filter_map(|token| {
            let (token_type, modifiers) = if is_state_declaration(&token) {
                (TokenType::Type, TokenModifiers::DECLARATION)
            } else {
                (analysis.reference_kind(&token)?.into(), TokenModifiers::NONE)
            };
            let stream_token = analysis.parse().token_of(&token)?;
            Some(SemanticToken {
                line: stream_token.line.saturating_sub(1),
                col: stream_token.column,
                length: stream_token.char_len(),
                token_type,
                modifiers,
            })
        })
        .collect()
}

/// Encode tokens in the relative five-integer layout of the LSP wire format.
pub fn encode(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * 5);
    let (mut prev_line, mut prev_col) = (0, 0);
    for token in tokens {
        let delta_line = token.line - prev_line;
        let delta_col = if delta_line == 0 {
            token.col - prev_col
        } else {
            token.col
        };
        data.extend([
            delta_line,
            delta_col,
            token.length,
            token.token_type.to_lsp_index(),
            token.modifiers.bits(),
        ]);
        prev_line = token.line;
        prev_col = token.col;
    }
    data
}
