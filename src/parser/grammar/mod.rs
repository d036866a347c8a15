//! Grammar modules for the EO+ dialects
//!
//! - `common` - Blocks shared by both dialects (main block, state block, desc, argument lists)
//! - `official` - Statement forms of the official quest engine
//! - `eoserv` - Statement and expression forms of EOSERV
//!
//! The parsing functions are generic over [`EoPlusParser`] so the grammar
//! stays independent of the token buffer and tree builder.

pub mod common;
pub mod eoserv;
pub mod official;

use crate::base::Flavor;
use crate::parser::ParseErrorKind;
use crate::parser::syntax_kind::SyntaxKind;

pub use common::parse_file_body;

/// Interface between the grammar functions and the parser
pub trait EoPlusParser {
    /// Kind of the nth significant token ahead (`EOF` past the end)
    fn nth(&self, n: usize) -> SyntaxKind;

    /// Consume trivia into the current node
    fn skip_trivia(&mut self);

    /// Consume the current significant token (and the trivia before it)
    fn bump(&mut self);

    /// Consume the current significant token wrapped in an `ERROR` node
    fn bump_error(&mut self);

    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);

    /// Record a syntax error at the current significant token
    fn error(&mut self, kind: ParseErrorKind, expected: &[SyntaxKind]);

    fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    /// Consume the token if it matches
    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        self.expect_in(kind, &[kind])
    }

    /// Match `kind`, reporting `expected` on failure.
    ///
    /// A single stray token in front of `kind` is skipped and reported as
    /// extraneous. Otherwise nothing is consumed and the token is reported
    /// missing.
    fn expect_in(&mut self, kind: SyntaxKind, expected: &[SyntaxKind]) -> bool {
        if self.eat(kind) {
            return true;
        }
        if !self.at_eof() && self.nth(1) == kind {
            self.error(ParseErrorKind::Extraneous, expected);
            self.bump_error();
            self.bump();
            return true;
        }
        self.error(ParseErrorKind::Missing, expected);
        false
    }

    /// Report a mismatch, then skip tokens until one in `resume` (or `EOF`).
    fn recover(&mut self, expected: &[SyntaxKind], resume: &[SyntaxKind]) {
        self.error(ParseErrorKind::Mismatched, expected);
        while !self.at_eof() && !self.at_any(resume) {
            self.bump_error();
        }
    }
}

/// Parse a whole document of the given dialect
pub fn parse_file<P: EoPlusParser>(p: &mut P, flavor: Flavor) {
    p.start_node(SyntaxKind::FILE);
    parse_file_body(p, flavor);
    p.skip_trivia();
    p.finish_node();
}
