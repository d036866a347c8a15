//! Error types for semantic analysis.

use thiserror::Error;

use crate::parser::SyntaxKind;

/// Internal invariant violations that abort one analysis.
///
/// These never reach the user as diagnostics; `analyze` logs them and
/// returns what it collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A tree element without any significant token.
    #[error("{0:?} node has no tokens")]
    EmptyNode(SyntaxKind),

    /// A tree token whose offset does not match any stream token.
    #[error("no stream token at offset {0}")]
    TokenNotInStream(u32),

    /// A node lacks a child the grammar guarantees.
    #[error("{parent:?} node is missing its {child}")]
    MissingChild {
        parent: SyntaxKind,
        child: &'static str,
    },
}
