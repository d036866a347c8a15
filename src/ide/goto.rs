//! Go-to-definition for states.

use crate::base::{Position, Span};
use crate::hir::SymbolKind;
use crate::parser::{NodeOrToken, SyntaxToken};

use super::analysis::{Analysis, is_state_declaration};

/// Lines of a state block shown in a definition peek, beyond the first
const PEEK_LINES: u32 = 7;
const PEEK_END_COLUMN: u32 = 255;

/// Where a definition lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    /// The declaring state block, capped to a short peek.
    pub range: Span,
    /// The declared name.
    pub selection_range: Span,
}

/// Definition of the state named at `position`.
///
/// Works on a state reference and on the declaration's own name. Rules and
/// actions are built in and have no definition.
pub fn goto_definition(analysis: &Analysis, position: Position) -> Option<NavigationTarget> {
    let token = analysis.token_at(position)?.element.into_token()?;

    if is_state_declaration(&token) {
        return target_for(analysis, &token);
    }

    if analysis.reference_kind(&token) != Some(SymbolKind::State) {
        return None;
    }
    let state = analysis
        .catalog()
        .lookup(SymbolKind::State, token.text())?
        .as_state()?;
    target_for(analysis, &state.declaration)
}

fn target_for(analysis: &Analysis, name: &SyntaxToken) -> Option<NavigationTarget> {
    let block = name.parent()?;
    let mut range = analysis.span(&NodeOrToken::Node(block))?;
    if range.end.line - range.start.line > PEEK_LINES {
        range.end = Position::new(range.start.line + PEEK_LINES, PEEK_END_COLUMN);
    }
    Some(NavigationTarget {
        range,
        selection_range: analysis.token_span(name)?,
    })
}
