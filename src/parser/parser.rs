//! Recursive descent parser for EO+
//!
//! Builds a rowan GreenNode tree from the buffered token stream. Trivia is
//! attached to the tree so text offsets stay exact; semantic passes skip it.
//! Syntax errors are recorded raw (offending token, expected set, active
//! rules) and humanized later by the diagnostics layer.

use rowan::{GreenNode, GreenNodeBuilder};

use super::grammar::{self, EoPlusParser};
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use super::token_stream::{LexError, TokenStream};
use crate::base::Flavor;

/// Parse result: green tree, token stream and raw errors
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    tokens: TokenStream,
    lex_errors: Vec<LexError>,
    errors: Vec<ParseError>,
    flavor: Flavor,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn lex_errors(&self) -> &[LexError] {
        &self.lex_errors
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Check if lexing and parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.lex_errors.is_empty() && self.errors.is_empty()
    }
}

/// How the parser failed to match the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A required token was absent; nothing was consumed
    Missing,
    /// One unexpected token was skipped before the expected one
    Extraneous,
    /// No alternative matched; tokens were skipped until a resume point
    Mismatched,
}

/// A raw syntax error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Stream index of the offending token (may be `EOF`)
    pub offending: usize,
    /// Expected token types, in vocabulary order
    pub expected: Vec<SyntaxKind>,
    /// Grammar rules active when the error was raised, outermost first
    pub rules: Vec<SyntaxKind>,
}

impl ParseError {
    /// Whether the error was raised while inside `rule`.
    pub fn within(&self, rule: SyntaxKind) -> bool {
        self.rules.contains(&rule)
    }
}

/// Parse EO+ source code of the given dialect into a CST
pub fn parse(input: &str, flavor: Flavor) -> Parse {
    let (tokens, lex_errors) = TokenStream::lex(input, flavor);

    let mut parser = Parser::new(&tokens);
    grammar::parse_file(&mut parser, flavor);
    let (green, errors) = parser.finish();

    tracing::trace!(
        ?flavor,
        tokens = tokens.len(),
        lex_errors = lex_errors.len(),
        parse_errors = errors.len(),
        "parsed document"
    );

    Parse {
        green,
        tokens,
        lex_errors,
        errors,
        flavor,
    }
}

/// The parser state
struct Parser<'t> {
    tokens: &'t TokenStream,
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<ParseError>,
    rules: Vec<SyntaxKind>,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t TokenStream) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            rules: Vec::new(),
        }
    }

    fn finish(self) -> (GreenNode, Vec<ParseError>) {
        (self.builder.finish(), self.errors)
    }

    /// Stream index of the nth significant token from the cursor
    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut count = 0;
        for token in self.tokens.iter().skip(self.pos) {
            if token.is_hidden() {
                continue;
            }
            if count == n {
                return Some(token.index);
            }
            count += 1;
        }
        None
    }

    fn push_current(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            if !token.is_eof() {
                self.builder.token(token.kind.into(), token.text.as_str());
                self.pos += 1;
            }
        }
    }
}

impl EoPlusParser for Parser<'_> {
    fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn skip_trivia(&mut self) {
        while self.tokens.get(self.pos).is_some_and(|t| t.is_hidden()) {
            self.push_current();
        }
    }

    fn bump(&mut self) {
        self.skip_trivia();
        self.push_current();
    }

    fn bump_error(&mut self) {
        self.skip_trivia();
        if self.at_eof() {
            return;
        }
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.push_current();
        self.builder.finish_node();
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        // leading trivia belongs to the root
        if !self.rules.is_empty() {
            self.skip_trivia();
        }
        self.builder.start_node(kind.into());
        self.rules.push(kind);
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
        self.rules.pop();
    }

    fn error(&mut self, kind: ParseErrorKind, expected: &[SyntaxKind]) {
        let offending = self
            .nth_index(0)
            .unwrap_or_else(|| self.tokens.len().saturating_sub(1));

        let mut expected = expected.to_vec();
        expected.sort();
        expected.dedup();

        tracing::trace!(?kind, offending, ?expected, "syntax error");

        self.errors.push(ParseError {
            kind,
            offending,
            expected,
            rules: self.rules.clone(),
        });
    }
}
