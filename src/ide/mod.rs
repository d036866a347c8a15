//! IDE features: high-level APIs for editor requests.
//!
//! This module sits between the semantic model (HIR) and a language server.
//! Each function corresponds to one editor request and works on a single
//! parsed document.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take an [`Analysis`] and a position, return data
//! 2. **No LSP types**: results use our own types, converted at the boundary
//! 3. **One parse**: every query reuses the parse held by the `Analysis`
//!
//! ## Usage
//!
//! ```ignore
//! use eoplus::ide::Analysis;
//!
//! let analysis = Analysis::new("state Begin { action Reset(); }", Flavor::Eoserv);
//! let hover = analysis.hover(Position::new(0, 22));
//! let symbols = analysis.document_symbols();
//! ```

mod analysis;
mod code_actions;
mod completion;
mod goto;
mod hover;
mod references;
mod rename;
mod semantic_tokens;
mod signature_help;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use code_actions::{CodeAction, code_actions};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{NavigationTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::find_references;
pub use rename::{RenameError, prepare_rename, rename};
pub use semantic_tokens::{SemanticToken, TokenModifiers, TokenType, encode, semantic_tokens};
pub use signature_help::{ParameterInformation, SignatureHelp, SignatureInformation, signature_help};
pub use symbols::{DocumentSymbol, DocumentSymbolKind, document_symbols};
