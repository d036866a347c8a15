//! Diagnostics: syntax and semantic error reporting.
//!
//! [`analyze`] parses a document, translates lexer and parser errors into
//! diagnostics, then runs the rule engine over the tree. Diagnostics come
//! back in order: syntax errors by position, then semantic diagnostics in
//! walk order.

mod listeners;
mod rules;

use std::sync::Arc;

use crate::base::{Flavor, Span, TextEdit};
use crate::parser::{Parse, parse};
use crate::settings::DiagnosticsSettings;

pub use listeners::{lexer_diagnostics, parser_diagnostics, syntax_diagnostics};
pub use rules::check_document;

/// Value of the `source` field of every diagnostic
pub const DIAGNOSTIC_SOURCE: &str = "eo+";

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

/// A titled set of edits that resolves a diagnostic
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QuickFix {
    pub title: String,
    pub edits: Vec<TextEdit>,
    pub is_preferred: bool,
}

impl QuickFix {
    pub fn new(title: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self {
            title: title.into(),
            edits,
            is_preferred: false,
        }
    }

    pub fn preferred(mut self) -> Self {
        self.is_preferred = true;
        self
    }

    pub fn with_preferred(mut self, is_preferred: bool) -> Self {
        self.is_preferred = is_preferred;
        self
    }
}

/// The fixes attached to one diagnostic
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuickFixes {
    #[default]
    NoFix,
    SingleFix(QuickFix),
    MultipleFixes(Vec<QuickFix>),
}

impl QuickFixes {
    pub fn iter(&self) -> std::slice::Iter<'_, QuickFix> {
        match self {
            QuickFixes::NoFix => [].iter(),
            QuickFixes::SingleFix(fix) => std::slice::from_ref(fix).iter(),
            QuickFixes::MultipleFixes(fixes) => fixes.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, QuickFixes::NoFix)
    }

    /// The fix an editor may apply automatically
    pub fn preferred(&self) -> Option<&QuickFix> {
        self.iter().find(|fix| fix.is_preferred)
    }
}

impl From<Vec<QuickFix>> for QuickFixes {
    fn from(mut fixes: Vec<QuickFix>) -> Self {
        match fixes.len() {
            0 => QuickFixes::NoFix,
            1 => fixes.pop().map_or(QuickFixes::NoFix, QuickFixes::SingleFix),
            _ => QuickFixes::MultipleFixes(fixes),
        }
    }
}

impl From<QuickFix> for QuickFixes {
    fn from(fix: QuickFix) -> Self {
        QuickFixes::SingleFix(fix)
    }
}

impl<'a> IntoIterator for &'a QuickFixes {
    type Item = &'a QuickFix;
    type IntoIter = std::slice::Iter<'a, QuickFix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Range (0-indexed lines and columns).
    pub range: Span,
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Machine-applicable fixes.
    pub fixes: QuickFixes,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(range: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            message: message.into(),
            fixes: QuickFixes::NoFix,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(range: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            message: message.into(),
            fixes: QuickFixes::NoFix,
        }
    }

    /// Attach fixes.
    pub fn with_fixes(mut self, fixes: impl Into<QuickFixes>) -> Self {
        self.fixes = fixes.into();
        self
    }

    pub fn source(&self) -> &'static str {
        DIAGNOSTIC_SOURCE
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Parse `source` and report every syntax and semantic diagnostic.
pub fn analyze(source: &str, flavor: Flavor, settings: &DiagnosticsSettings) -> Vec<Diagnostic> {
    let parse = parse(source, flavor);
    analyze_parse(&parse, source, settings)
}

/// Report diagnostics for an existing parse of `source`.
pub fn analyze_parse(parse: &Parse, source: &str, settings: &DiagnosticsSettings) -> Vec<Diagnostic> {
    let mut diagnostics = syntax_diagnostics(parse);
    let syntax = diagnostics.len();

    if let Err(error) = check_document(parse, source, settings, &mut diagnostics) {
        tracing::warn!(%error, "semantic analysis aborted");
    }

    tracing::debug!(
        flavor = %parse.flavor(),
        syntax,
        semantic = diagnostics.len() - syntax,
        "analyzed document"
    );

    diagnostics
}
