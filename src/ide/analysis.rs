//! AnalysisHost and Analysis: document state for the IDE features.
//!
//! An [`Analysis`] parses one document once and answers every query against
//! that parse. The [`AnalysisHost`] keeps one `Analysis` per open document
//! and reparses when text or settings change.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(Settings::default());
//! host.set_file_content("file:///quest.eqf", "main { }");
//!
//! let analysis = host.analysis("file:///quest.eqf").unwrap();
//! let diagnostics = analysis.diagnostics(&host.settings().diagnostics);
//! let hover = analysis.hover(Position::new(0, 1));
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{Caret, Flavor, Position, Span, TextEdit};
use crate::hir::{
    Diagnostic, ReferenceClassifier, ReferenceKind, SymbolCatalog, TokenPosition, resolve,
};
use crate::parser::{NodeOrToken, Parse, SyntaxElement, SyntaxKind, SyntaxToken, parse, tree};
use crate::settings::{DiagnosticsSettings, Settings};

use super::{
    CodeAction, CompletionItem, DocumentSymbol, HoverResult, NavigationTarget, RenameError,
    SemanticToken, SignatureHelp,
};

/// Owns the open documents and the settings they are analyzed with.
///
/// Documents are kept in the order they were opened.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    settings: Settings,
    files: IndexMap<Arc<str>, Analysis>,
}

impl AnalysisHost {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            files: IndexMap::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings. Documents are reparsed when the flavor changes.
    pub fn set_settings(&mut self, settings: Settings) {
        let reparse = settings.flavor() != self.settings.flavor();
        self.settings = settings;
        if reparse {
            let flavor = self.settings.flavor();
            tracing::debug!(%flavor, files = self.files.len(), "flavor changed, reparsing");
            for analysis in self.files.values_mut() {
                *analysis = Analysis::new(analysis.source(), flavor);
            }
        }
    }

    /// Set the text of a document, parsing it with the current flavor.
    pub fn set_file_content(&mut self, uri: &str, content: &str) {
        let analysis = Analysis::new(content, self.settings.flavor());
        self.files.insert(Arc::from(uri), analysis);
    }

    pub fn remove_file(&mut self, uri: &str) -> bool {
        self.files.shift_remove(uri).is_some()
    }

    /// Open document URIs in opening order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|uri| &**uri)
    }

    pub fn has_file(&self, uri: &str) -> bool {
        self.files.contains_key(uri)
    }

    pub fn analysis(&self, uri: &str) -> Option<&Analysis> {
        self.files.get(uri)
    }

    /// Diagnostics for a document under the current settings
    pub fn diagnostics(&self, uri: &str) -> Vec<Diagnostic> {
        self.analysis(uri)
            .map(|analysis| analysis.diagnostics(&self.settings.diagnostics))
            .unwrap_or_default()
    }
}

/// One parsed document and the semantic model built from it.
#[derive(Debug, Clone)]
pub struct Analysis {
    source: Arc<str>,
    parse: Parse,
    catalog: SymbolCatalog,
    classifier: ReferenceClassifier,
}

impl Analysis {
    pub fn new(source: &str, flavor: Flavor) -> Self {
        let parse = parse(source, flavor);
        let catalog = SymbolCatalog::build(&parse);
        Self {
            source: Arc::from(source),
            parse,
            catalog,
            classifier: ReferenceClassifier::new(flavor),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    pub fn flavor(&self) -> Flavor {
        self.parse.flavor()
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &ReferenceClassifier {
        &self.classifier
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn diagnostics(&self, settings: &DiagnosticsSettings) -> Vec<Diagnostic> {
        crate::hir::analyze_parse(&self.parse, &self.source, settings)
    }

    pub fn code_actions(&self, range: Span, settings: &DiagnosticsSettings) -> Vec<CodeAction> {
        super::code_actions::code_actions(self, range, settings)
    }

    pub fn hover(&self, position: Position) -> Option<HoverResult> {
        super::hover::hover(self, position)
    }

    pub fn goto_definition(&self, position: Position) -> Option<NavigationTarget> {
        super::goto::goto_definition(self, position)
    }

    pub fn find_references(&self, position: Position, include_declaration: bool) -> Vec<Span> {
        super::references::find_references(self, position, include_declaration)
    }

    pub fn prepare_rename(&self, position: Position) -> Result<Span, RenameError> {
        super::rename::prepare_rename(self, position)
    }

    pub fn rename(&self, position: Position, new_name: &str) -> Option<Vec<TextEdit>> {
        super::rename::rename(self, position, new_name)
    }

    pub fn document_symbols(&self) -> Vec<DocumentSymbol> {
        super::symbols::document_symbols(self)
    }

    pub fn semantic_tokens(&self) -> Vec<SemanticToken> {
        super::semantic_tokens::semantic_tokens(self)
    }

    pub fn signature_help(&self, position: Position) -> Option<SignatureHelp> {
        super::signature_help::signature_help(self, position)
    }

    pub fn completions(&self, position: Position) -> Vec<CompletionItem> {
        super::completion::completions(self, position)
    }

    // =========================================================================
    // Shared helpers for the feature modules
    // =========================================================================

    pub(crate) fn token_at(&self, position: Position) -> Option<TokenPosition> {
        resolve(&self.parse, Caret::from(position))
    }

    /// Reference kind of an identifier token
    pub(crate) fn reference_kind(&self, token: &SyntaxToken) -> Option<ReferenceKind> {
        if token.kind() != SyntaxKind::IDENT {
            return None;
        }
        self.classifier.classify(&NodeOrToken::Token(token.clone()))
    }

    pub(crate) fn span(&self, element: &SyntaxElement) -> Option<Span> {
        self.parse.span_of(element)
    }

    pub(crate) fn token_span(&self, token: &SyntaxToken) -> Option<Span> {
        self.parse.token_of(token).map(|token| token.span())
    }
}

/// Whether `token` is the name in `state <name> { ... }`
pub(crate) fn is_state_declaration(token: &SyntaxToken) -> bool {
    token.kind() == SyntaxKind::IDENT
        && tree::parent_kind(&NodeOrToken::Token(token.clone())) == Some(SyntaxKind::STATE_BLOCK)
}

/// The state name token for a caret on the name itself or on the `state` keyword
pub(crate) fn state_declaration_at(element: &SyntaxElement) -> Option<SyntaxToken> {
    let token = element.as_token()?;
    if is_state_declaration(token) {
        return Some(token.clone());
    }
    if token.kind() != SyntaxKind::STATE_KW || tree::child_index(element) != Some(0) {
        return None;
    }
    let parent = token.parent()?;
    let name = tree::child(&parent, 1)?.into_token()?;
    is_state_declaration(&name).then_some(name)
}
