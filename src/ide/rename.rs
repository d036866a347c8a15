//! Rename for states.

use thiserror::Error;

use crate::base::{Position, Span, TextEdit};
use crate::hir::{SymbolKind, names_match};

use super::analysis::{Analysis, is_state_declaration, state_declaration_at};
use super::references::identifiers;

/// Why the element at a caret cannot be renamed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("You cannot rename this element.")]
    Element,
    #[error("You cannot rename rules.")]
    Rule,
    #[error("You cannot rename actions.")]
    Action,
}

impl RenameError {
    /// Response error code reported to the editor
    pub fn code(&self) -> i32 {
        match self {
            RenameError::Element => 1001,
            RenameError::Rule => 1002,
            RenameError::Action => 1003,
        }
    }
}

/// Range to rename at `position`.
///
/// A caret on the `state` keyword of a declaration selects the state's name.
pub fn prepare_rename(analysis: &Analysis, position: Position) -> Result<Span, RenameError> {
    let element = analysis
        .token_at(position)
        .ok_or(RenameError::Element)?
        .element;

    if let Some(name) = state_declaration_at(&element) {
        return analysis.token_span(&name).ok_or(RenameError::Element);
    }

    let token = element.into_token().ok_or(RenameError::Element)?;
    match analysis.reference_kind(&token) {
        Some(SymbolKind::Rule) => Err(RenameError::Rule),
        Some(SymbolKind::Action) => Err(RenameError::Action),
        Some(SymbolKind::State) => analysis.token_span(&token).ok_or(RenameError::Element),
        None => Err(RenameError::Element),
    }
}

/// Edits renaming the state at `position` to `new_name`.
///
/// Every declaration and reference whose name matches case-insensitively
/// is replaced. Returns `None` when the caret is not on a state.
pub fn rename(analysis: &Analysis, position: Position, new_name: &str) -> Option<Vec<TextEdit>> {
    let element = analysis.token_at(position)?.element;
    let token = match state_declaration_at(&element) {
        Some(name) => name,
        None => {
            let token = element.into_token()?;
            if analysis.reference_kind(&token) != Some(SymbolKind::State) {
                return None;
            }
            token
        }
    };

    let old_name = token.text();
    let edits = identifiers(analysis)
        .filter(|candidate| names_match(candidate.text(), old_name))
        .filter(|candidate| {
            is_state_declaration(candidate)
                || analysis.reference_kind(candidate) == Some(SymbolKind::State)
        })
        .filter_map(|candidate| analysis.token_span(&candidate))
        .map(|range| TextEdit::replace(range, new_name))
        .collect();

    tracing::debug!(old_name, new_name, "renaming state");
    Some(edits)
}
