//! Quick-fix code actions derived from diagnostics.

use crate::base::{Span, TextEdit};
use crate::hir::Diagnostic;
use crate::settings::DiagnosticsSettings;

use super::analysis::Analysis;

/// One applicable quick fix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeAction {
    pub title: String,
    /// The diagnostic the fix resolves.
    pub diagnostic: Diagnostic,
    pub edits: Vec<TextEdit>,
    pub is_preferred: bool,
}

/// Quick fixes of every diagnostic touching `range`.
pub fn code_actions(
    analysis: &Analysis,
    range: Span,
    settings: &DiagnosticsSettings,
) -> Vec<CodeAction> {
    analysis
        .diagnostics(settings)
        .into_iter()
        .filter(|diagnostic| overlaps(diagnostic.range, range))
        .flat_map(|diagnostic| {
            diagnostic
                .fixes
                .iter()
                .map(|fix| CodeAction {
                    title: fix.title.clone(),
                    diagnostic: diagnostic.clone(),
                    edits: fix.edits.clone(),
                    is_preferred: fix.is_preferred,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn overlaps(a: Span, b: Span) -> bool {
    let key = |p: crate::base::Position| (p.line, p.column);
    key(a.start) <= key(b.end) && key(b.start) <= key(a.end)
}
