//! Hover information implementation.

use std::fmt::Write;

use crate::base::{Position, Span};
use crate::hir::{InvocableSymbol, StateSymbol, Symbol, SymbolKind};

use super::analysis::{Analysis, is_state_declaration};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Range of the hovered name.
    pub range: Span,
}

/// Hover for a state declaration or a rule, action or state reference.
pub fn hover(analysis: &Analysis, position: Position) -> Option<HoverResult> {
    let token_position = analysis.token_at(position)?;
    let token = token_position.element.into_token()?;

    let kind = if is_state_declaration(&token) {
        SymbolKind::State
    } else {
        analysis.reference_kind(&token)?
    };

    let symbol = analysis.catalog().lookup(kind, token.text())?;
    let contents = match symbol {
        Symbol::Invocable(invocable) => invocable_markdown(invocable),
        Symbol::State(state) => state_markdown(state),
    };

    Some(HoverResult {
        contents,
        range: analysis.token_span(&token)?,
    })
}

fn state_markdown(state: &StateSymbol) -> String {
    let mut value = format!("```\n(state) {}\n```", state.name);
    if let Some(description) = &state.description {
        let _ = write!(value, "\n```\n{description}\n```");
    }
    value
}

fn invocable_markdown(symbol: &InvocableSymbol) -> String {
    let mut value = format!(
        "```\n({}) {}\n```\n---\n{}",
        symbol.kind,
        symbol.signature(),
        symbol.documentation
    );
    for parameter in symbol.parameters {
        let _ = write!(value, "\n\n`{}`", parameter.name);
        if parameter.optional {
            value.push_str(" *(optional)*");
        }
        let _ = write!(value, "  \n{}", parameter.documentation);
    }
    value
}
