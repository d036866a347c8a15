//! Signature help for rule and action invocations.

use crate::base::Position;
use crate::hir::{InvocableSymbol, SymbolKind};
use crate::parser::{NodeOrToken, SyntaxElement, SyntaxKind, SyntaxNode, tree};

use super::analysis::Analysis;

/// Signatures shown while typing arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    pub signatures: Vec<SignatureInformation>,
    pub active_signature: u32,
    /// Zero-based index of the argument under the caret.
    pub active_parameter: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInformation {
    /// `Name(a: integer, b?: string)`
    pub label: String,
    /// Markdown documentation.
    pub documentation: String,
    pub parameters: Vec<ParameterInformation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInformation {
    pub label: String,
    pub documentation: String,
}

impl From<&InvocableSymbol> for SignatureInformation {
    fn from(symbol: &InvocableSymbol) -> Self {
        Self {
            label: symbol.signature(),
            documentation: symbol.documentation.to_string(),
            parameters: symbol
                .parameters
                .iter()
                .map(|parameter| ParameterInformation {
                    label: parameter.signature(),
                    documentation: parameter.documentation.to_string(),
                })
                .collect(),
        }
    }
}

/// Signature of the rule or action whose argument list contains `position`.
///
/// Nothing is returned once the caret has moved past the closing `)`.
pub fn signature_help(analysis: &Analysis, position: Position) -> Option<SignatureHelp> {
    let element = analysis.token_at(position)?.element;
    let list = argument_list(&element)?;

    if let Some(close) = closing_paren(&list) {
        let start = analysis.span(&close)?.start;
        if (position.line, position.column) > (start.line, start.column) {
            return None;
        }
    }

    let name = tree::prev_sibling(&NodeOrToken::Node(list.clone()))?.into_token()?;
    let kind = analysis.reference_kind(&name)?;
    if kind == SymbolKind::State {
        return None;
    }
    let symbol = analysis.catalog().lookup(kind, name.text())?.as_invocable()?;

    Some(SignatureHelp {
        signatures: vec![SignatureInformation::from(symbol)],
        active_signature: 0,
        active_parameter: active_parameter(analysis, &list, position),
    })
}

/// The argument list node at or above `element`
fn argument_list(element: &SyntaxElement) -> Option<SyntaxNode> {
    match element {
        NodeOrToken::Node(node) if node.kind() == SyntaxKind::ARGUMENT_LIST => Some(node.clone()),
        _ => tree::ancestor(element, SyntaxKind::ARGUMENT_LIST),
    }
}

fn closing_paren(list: &SyntaxNode) -> Option<SyntaxElement> {
    tree::significant_children(list)
        .last()
        .filter(|child| child.kind() == SyntaxKind::R_PAREN)
}

/// Number of argument separators before the caret
fn active_parameter(analysis: &Analysis, list: &SyntaxNode, position: Position) -> u32 {
    let Some(arguments) = list
        .children()
        .find(|node| node.kind() == SyntaxKind::ARGUMENTS)
    else {
        return 0;
    };

    tree::significant_children(&arguments)
        .filter(|child| child.kind() == SyntaxKind::COMMA)
        .filter_map(|comma| analysis.span(&comma))
        .filter(|span| (span.start.line, span.start.column) < (position.line, position.column))
        .count() as u32
}
