//! Find references for states.

use crate::base::{Position, Span};
use crate::hir::{SymbolKind, names_match};
use crate::parser::{NodeOrToken, SyntaxKind, SyntaxToken};

use super::analysis::{Analysis, is_state_declaration};

/// Every `goto` and other state reference to the state named at `position`.
///
/// Matching is case-insensitive. The declaration is appended last when
/// `include_declaration` is set.
pub fn find_references(
    analysis: &Analysis,
    position: Position,
    include_declaration: bool,
) -> Vec<Span> {
    let Some(declaration) = declaration_at(analysis, position) else {
        return Vec::new();
    };

    let mut result: Vec<Span> = identifiers(analysis)
        .filter(|token| names_match(token.text(), declaration.text()))
        .filter(|token| analysis.reference_kind(token) == Some(SymbolKind::State))
        .filter_map(|token| analysis.token_span(&token))
        .collect();

    if include_declaration {
        result.extend(analysis.token_span(&declaration));
    }
    result
}

/// The declaring name token for a caret on a state name or state reference
fn declaration_at(analysis: &Analysis, position: Position) -> Option<SyntaxToken> {
    let token = analysis.token_at(position)?.element.into_token()?;
    if is_state_declaration(&token) {
        return Some(token);
    }
    if analysis.reference_kind(&token) != Some(SymbolKind::State) {
        return None;
    }
    analysis
        .catalog()
        .lookup(SymbolKind::State, token.text())?
        .as_state()
        .map(|state| state.declaration.clone())
}

/// Identifier tokens of the document in order
pub(crate) fn identifiers(analysis: &Analysis) -> impl Iterator<Item = SyntaxToken> + use<> {
    analysis
        .parse()
        .syntax()
        .descendants_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .filter(|token| token.kind() == SyntaxKind::IDENT)
}
