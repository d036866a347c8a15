//! Rowan-based parser for the EO+ dialects
//!
//! This module provides a lossless parser using:
//! - **logos** for lexing (keywords are case-insensitive)
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text + Flavor
//!     ↓
//! Lexer (logos) → TokenStream (1-based lines, stream indices, EOF)
//!     ↓
//! Parser → GreenNode tree + raw syntax errors
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! HIR → catalog, classification, diagnostics
//! ```
//!
//! Both dialects share one vocabulary. Under the official dialect the
//! EOSERV-only keywords lex as identifiers.

#[allow(clippy::module_inception)]
mod parser;

pub mod grammar;
mod lexer;
mod syntax_kind;
mod token_stream;
pub mod tree;

pub use lexer::{Lexeme, Lexer, tokenize};
pub use parser::{Parse, ParseError, ParseErrorKind, parse};
pub use syntax_kind::{EoPlusLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use token_stream::{LexError, Token, TokenStream};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, NodeOrToken, TextRange, TextSize};
