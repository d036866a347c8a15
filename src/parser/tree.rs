//! Navigation helpers over the CST
//!
//! Grammar positions are counted over *significant* children: hidden tokens
//! (trivia and unlexable text) are skipped, while tokens, rule nodes and
//! `ERROR` nodes all count.

use rowan::NodeOrToken;

use super::parser::Parse;
use super::syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use super::token_stream::Token;
use crate::base::{Position, Span};

/// Children of `node` that are not trivia
pub fn significant_children(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> + use<> {
    node.children_with_tokens().filter(|child| !is_hidden(child))
}

/// The `index`-th significant child
pub fn child(node: &SyntaxNode, index: usize) -> Option<SyntaxElement> {
    significant_children(node).nth(index)
}

pub fn child_count(node: &SyntaxNode) -> usize {
    significant_children(node).count()
}

/// Position of `element` among its parent's significant children
pub fn child_index(element: &SyntaxElement) -> Option<usize> {
    let parent = element.parent()?;
    significant_children(&parent).position(|child| child == *element)
}

/// The significant sibling right after `element`
pub fn next_sibling(element: &SyntaxElement) -> Option<SyntaxElement> {
    std::iter::successors(element.next_sibling_or_token(), |sibling| sibling.next_sibling_or_token())
        .find(|sibling| !is_hidden(sibling))
}

/// The significant sibling right before `element`
pub fn prev_sibling(element: &SyntaxElement) -> Option<SyntaxElement> {
    std::iter::successors(element.prev_sibling_or_token(), |sibling| sibling.prev_sibling_or_token())
        .find(|sibling| !is_hidden(sibling))
}

/// Kind of the parent node, if any
pub fn parent_kind(element: &SyntaxElement) -> Option<SyntaxKind> {
    element.parent().map(|parent| parent.kind())
}

/// Significant descendant tokens in document order
pub fn significant_tokens(element: &SyntaxElement) -> Vec<SyntaxToken> {
    match element {
        NodeOrToken::Token(token) if token.kind().is_hidden() => Vec::new(),
        NodeOrToken::Token(token) => vec![token.clone()],
        NodeOrToken::Node(node) => node
            .descendants_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .filter(|token| !token.kind().is_hidden())
            .collect(),
    }
}

pub fn first_token(element: &SyntaxElement) -> Option<SyntaxToken> {
    match element {
        NodeOrToken::Token(token) => Some(token.clone()).filter(|token| !token.kind().is_hidden()),
        NodeOrToken::Node(node) => node
            .descendants_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .find(|token| !token.kind().is_hidden()),
    }
}

pub fn last_token(element: &SyntaxElement) -> Option<SyntaxToken> {
    match element {
        NodeOrToken::Token(token) => Some(token.clone()).filter(|token| !token.kind().is_hidden()),
        NodeOrToken::Node(node) => {
            // walk back from the last leaf, stopping at the node's start
            let start = node.text_range().start();
            std::iter::successors(node.last_token(), |token| token.prev_token())
                .take_while(|token| token.text_range().start() >= start)
                .find(|token| !token.kind().is_hidden())
        }
    }
}

/// Text of the significant tokens, concatenated without trivia
pub fn text(element: &SyntaxElement) -> String {
    significant_tokens(element)
        .iter()
        .map(|token| token.text())
        .collect()
}

/// Hidden tokens: trivia and unlexable text
pub fn is_hidden(element: &SyntaxElement) -> bool {
    element.as_token().is_some_and(|token| token.kind().is_hidden())
}

/// Whether the element was produced by error recovery
pub fn is_error(element: &SyntaxElement) -> bool {
    match element {
        NodeOrToken::Node(node) => node.kind() == SyntaxKind::ERROR,
        NodeOrToken::Token(token) => token
            .parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::ERROR),
    }
}

/// Nearest ancestor node (starting at the element's parent) of `kind`
pub fn ancestor(element: &SyntaxElement, kind: SyntaxKind) -> Option<SyntaxNode> {
    element.parent()?.ancestors().find(|node| node.kind() == kind)
}

impl Parse {
    /// The stream token backing a tree token
    pub fn token_of(&self, token: &SyntaxToken) -> Option<&Token> {
        let index = self.tokens().index_at_offset(token.text_range().start())?;
        self.tokens().get(index)
    }

    /// Stream indices of the first and last significant tokens of `element`
    pub fn token_range(&self, element: &SyntaxElement) -> Option<(usize, usize)> {
        let first = self.token_of(&first_token(element)?)?.index;
        let last = self.token_of(&last_token(element)?)?.index;
        Some((first, last))
    }

    /// Editor range from the first token's start to the last token's end
    pub fn span_of(&self, element: &SyntaxElement) -> Option<Span> {
        let (first, last) = self.token_range(element)?;
        let start = self.tokens().get(first)?.span().start;
        let end = self.tokens().get(last)?.span().end;
        Some(Span::new(start, end))
    }

    /// Start position of `element`
    pub fn start_of(&self, element: &SyntaxElement) -> Option<Position> {
        self.span_of(element).map(|span| span.start)
    }
}
