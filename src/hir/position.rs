//! Caret resolution.
//!
//! Maps a caret to the token under it and the deepest tree element that
//! contains that token.

use crate::base::Caret;
use crate::parser::{NodeOrToken, Parse, SyntaxElement, SyntaxKind, SyntaxNode, Token, tree};

/// The token under a caret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPosition {
    /// Stream index of the token
    pub index: usize,
    /// The matched token, or the rule node whose hidden tokens matched
    pub element: SyntaxElement,
    /// Token text up to the caret
    pub text: String,
}

/// Find the token under `caret`.
///
/// Children are searched before a node's own token range, so the deepest
/// match wins. A token matches when it is on the caret line and the caret
/// column lies within it, both ends inclusive.
pub fn resolve(parse: &Parse, caret: Caret) -> Option<TokenPosition> {
    resolve_node(parse, &parse.syntax(), caret)
}

fn resolve_node(parse: &Parse, node: &SyntaxNode, caret: Caret) -> Option<TokenPosition> {
    let range = node_token_range(parse, node);

    if let Some((first, last)) = range {
        let first_line = parse.tokens().get(first).map(|t| t.line);
        let last_line = parse.tokens().get(last).map(|t| t.line);
        if first_line.is_some_and(|line| line > caret.line)
            || last_line.is_some_and(|line| line < caret.line)
        {
            return None;
        }
    }

    for child in tree::significant_children(node) {
        let position = match &child {
            NodeOrToken::Node(child_node) if child_node.kind() != SyntaxKind::ERROR => {
                resolve_node(parse, child_node, caret)
            }
            _ => resolve_terminal(parse, &child, caret),
        };
        if position.is_some() {
            return position;
        }
    }

    let (first, last) = range?;
    (first..=last).find_map(|index| {
        let token = parse.tokens().get(index)?;
        position_of(token, caret, NodeOrToken::Node(node.clone()))
    })
}

/// A token, or an `ERROR` node standing for the token it wraps
fn resolve_terminal(parse: &Parse, element: &SyntaxElement, caret: Caret) -> Option<TokenPosition> {
    let token = tree::first_token(element)?;
    let stream_token = parse.token_of(&token)?;
    position_of(stream_token, caret, NodeOrToken::Token(token))
}

fn position_of(token: &Token, caret: Caret, element: SyntaxElement) -> Option<TokenPosition> {
    let start = token.column;
    let end = start + token.char_len();
    if token.line != caret.line || caret.column < start || caret.column > end {
        return None;
    }

    let text = token
        .text
        .chars()
        .take((caret.column - start) as usize)
        .collect();

    Some(TokenPosition {
        index: token.index,
        element,
        text,
    })
}

/// Stream range of a node; the file node extends to `EOF`
fn node_token_range(parse: &Parse, node: &SyntaxNode) -> Option<(usize, usize)> {
    let eof = parse.tokens().len().checked_sub(1)?;
    if node.kind() == SyntaxKind::FILE {
        let first = parse
            .token_range(&NodeOrToken::Node(node.clone()))
            .map_or(eof, |(first, _)| first);
        return Some((first, eof));
    }
    parse.token_range(&NodeOrToken::Node(node.clone()))
}
