//! # eoplus-analyzer
//!
//! Parsing, semantic diagnostics and editor features for EO+ quest files,
//! in both the Official and the Eoserv flavor of the language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Editor features (hover, completion, rename, outline)
//!   ↓
//! hir       → Symbols, reference classification, diagnostic rules
//!   ↓
//! settings  → Flavor selection and diagnostic options
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST
//!   ↓
//! base      → Primitives (Flavor, Span/Position, TextEdit)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → settings → hir → ide)
// ============================================================================

/// Foundation types: Flavor, Span/Position, TextEdit
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, flavor grammars
pub mod parser;

/// Settings shared by every analysis
pub mod settings;

/// High-level IR: symbol catalog, references and diagnostics
pub mod hir;

/// IDE features: hover, completion, goto-definition, find-references
pub mod ide;

// Re-export foundation types
pub use base::{Caret, Flavor, FlavorError, Position, Span, TextEdit};

// Re-export the main entry points
pub use hir::{Diagnostic, QuickFix, QuickFixes, Severity, analyze};
pub use ide::{Analysis, AnalysisHost};
pub use parser::{Parse, parse};
pub use settings::{DiagnosticsSettings, LanguageSettings, Settings, TraceLevel, TraceSettings};
