//! High-level IR (HIR): the semantic model of one EO+ document.
//!
//! Everything here is rebuilt per call from a [`Parse`](crate::parser::Parse);
//! nothing persists between analyses.
//!
//! ## Key Types
//!
//! - [`resolve`] / [`TokenPosition`]: Caret to token resolution
//! - [`ReferenceClassifier`]: Decides what an identifier refers to
//! - [`SymbolCatalog`]: Built-in rules and actions plus declared states
//! - [`suggest`]: "Did you mean" spelling suggestions
//! - [`analyze`] / [`Diagnostic`]: Syntax errors and the semantic rule engine
//!
//! ## Layers
//!
//! ```text
//! parse(text, flavor)        ← CST + token stream + raw syntax errors
//!     │
//!     ▼
//! SymbolCatalog::build       ← states + built-ins of the flavor
//!     │
//!     ▼
//! ReferenceClassifier        ← rule / action / state positions
//!     │
//!     ▼
//! check_document             ← semantic diagnostics with quick fixes
//! ```

mod diagnostics;
mod error;
mod position;
mod reference;
mod suggest;
pub mod symbols;

pub use diagnostics::{
    DIAGNOSTIC_SOURCE, Diagnostic, QuickFix, QuickFixes, Severity, analyze, analyze_parse,
    check_document, lexer_diagnostics, parser_diagnostics, syntax_diagnostics,
};
pub use error::AnalysisError;
pub use position::{TokenPosition, resolve};
pub use reference::{ReferenceClassifier, ReferenceKind};
pub use suggest::suggest;
pub use symbols::{
    InvocableSymbol, Parameter, StateSymbol, Symbol, SymbolCatalog, SymbolKind, ValueType,
    names_match,
};
