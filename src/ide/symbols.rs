//! Document symbols (outline) implementation.

use crate::base::Span;
use crate::parser::{NodeOrToken, SyntaxKind, SyntaxNode, tree};

use super::analysis::Analysis;

/// Kind of outline entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentSymbolKind {
    Module,
}

impl DocumentSymbolKind {
    /// Convert to LSP SymbolKind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            DocumentSymbolKind::Module => 2,
        }
    }
}

/// One entry of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSymbol {
    pub name: String,
    /// The state description, quotes included.
    pub detail: Option<String>,
    pub kind: DocumentSymbolKind,
    /// The whole block.
    pub range: Span,
    /// The keyword of the main block or the name of a state.
    pub selection_range: Span,
}

/// The first main block, then every state in document order.
pub fn document_symbols(analysis: &Analysis) -> Vec<DocumentSymbol> {
    let mut result = Vec::new();

    if let Some(main) = find_main_block(&analysis.parse().syntax())
        && let Some(symbol) = main_symbol(analysis, main)
    {
        result.push(symbol);
    }

    for state in analysis.catalog().states() {
        let Some(block) = state.declaration.parent() else {
            continue;
        };
        let (Some(range), Some(selection_range)) = (
            analysis.span(&NodeOrToken::Node(block)),
            analysis.token_span(&state.declaration),
        ) else {
            continue;
        };
        result.push(DocumentSymbol {
            name: state.name.to_string(),
            detail: state.description.as_ref().map(|d| d.to_string()),
            kind: DocumentSymbolKind::Module,
            range,
            selection_range,
        });
    }

    result
}

fn main_symbol(analysis: &Analysis, main: SyntaxNode) -> Option<DocumentSymbol> {
    let keyword = tree::child(&main, 0)?;
    Some(DocumentSymbol {
        name: "main".to_string(),
        detail: None,
        kind: DocumentSymbolKind::Module,
        selection_range: analysis.span(&keyword)?,
        range: analysis.span(&NodeOrToken::Node(main))?,
    })
}

fn find_main_block(file: &SyntaxNode) -> Option<SyntaxNode> {
    file.children()
        .filter(|block| block.kind() == SyntaxKind::BLOCK)
        .filter_map(|block| block.first_child())
        .find(|node| node.kind() == SyntaxKind::MAIN_BLOCK)
}
