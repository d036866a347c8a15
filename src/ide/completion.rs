//! Completion suggestions implementation.
//!
//! Keywords valid at the caret are offered first. When none of them match
//! the typed prefix, the symbols for the reference under the caret are
//! offered instead.

use std::sync::Arc;

use crate::base::{Flavor, Position};
use crate::hir::{Symbol, SymbolKind};
use crate::parser::grammar::common::statement_first;
use crate::parser::{NodeOrToken, SyntaxKind, SyntaxNode, SyntaxToken, tree};

use super::analysis::Analysis;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Function,
    Module,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Function => 3,
            CompletionKind::Module => 9,
            CompletionKind::Keyword => 14,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<String>,
    /// Markdown documentation (shown in popup).
    pub documentation: Option<String>,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_documentation(mut self, documentation: Option<String>) -> Self {
        self.documentation = documentation;
        self
    }
}

const BLOCK_KEYWORDS: &[SyntaxKind] = &[SyntaxKind::MAIN_KW, SyntaxKind::STATE_KW];

const ATTRIBUTE_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::QUESTNAME_KW,
    SyntaxKind::VERSION_KW,
    SyntaxKind::HIDDEN_KW,
    SyntaxKind::HIDDEN_END_KW,
    SyntaxKind::DISABLED_KW,
];

const GOTO_KEYWORD: &[SyntaxKind] = &[SyntaxKind::GOTO_KW];

const EOSERV_STATEMENTS: &[SyntaxKind] = &[
    SyntaxKind::RULE,
    SyntaxKind::GOAL,
    SyntaxKind::IF,
    SyntaxKind::ELSEIF,
    SyntaxKind::ELSE,
    SyntaxKind::ACTION,
];

/// Completions at `position`, ranked against the text typed so far.
pub fn completions(analysis: &Analysis, position: Position) -> Vec<CompletionItem> {
    let Some(token_position) = analysis.token_at(position) else {
        return Vec::new();
    };

    let (keywords, prefix) = match &token_position.element {
        NodeOrToken::Token(token) => {
            let prefix = if is_word(token.kind()) {
                token_position.text.as_str()
            } else {
                ""
            };
            (token_keywords(analysis.flavor(), token), prefix)
        }
        NodeOrToken::Node(node) => (
            trivia_keywords(analysis, node, token_position.index),
            "",
        ),
    };

    let items = keywords
        .iter()
        .filter_map(|kind| keyword_label(*kind))
        .map(|label| CompletionItem::new(label, CompletionKind::Keyword))
        .collect();
    let mut completions = filter_completions(prefix, items);

    if completions.is_empty()
        && let NodeOrToken::Token(token) = &token_position.element
    {
        completions = filter_completions(prefix, reference_completions(analysis, token));
    }

    tracing::trace!(prefix, count = completions.len(), "completions");
    completions
}

fn is_word(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::IDENT || kind.is_keyword()
}

/// Keyword label as typed in source: `HIDDEN_END_` becomes `hidden_end`
fn keyword_label(kind: SyntaxKind) -> Option<String> {
    let name = kind.symbolic_name()?;
    Some(name.trim_end_matches('_').to_lowercase())
}

/// Keywords that could replace the word token the caret is on
fn token_keywords(flavor: Flavor, token: &SyntaxToken) -> &'static [SyntaxKind] {
    let Some(parent) = token.parent() else {
        return &[];
    };
    let element = NodeOrToken::Token(token.clone());

    if parent.kind() == SyntaxKind::ERROR {
        return match parent.parent().map(|grandparent| grandparent.kind()) {
            Some(SyntaxKind::FILE) => BLOCK_KEYWORDS,
            Some(SyntaxKind::MAIN_BLOCK) => ATTRIBUTE_KEYWORDS,
            Some(SyntaxKind::STATE_BLOCK) => statement_first(flavor),
            _ => &[],
        };
    }

    let first = tree::child_index(&element) == Some(0);
    match parent.kind() {
        SyntaxKind::MAIN_BLOCK | SyntaxKind::STATE_BLOCK if first => BLOCK_KEYWORDS,
        SyntaxKind::QUESTNAME_ATTRIBUTE
        | SyntaxKind::VERSION_ATTRIBUTE
        | SyntaxKind::HIDDEN_ATTRIBUTE
        | SyntaxKind::HIDDEN_END_ATTRIBUTE
        | SyntaxKind::DISABLED_ATTRIBUTE
            if first =>
        {
            ATTRIBUTE_KEYWORDS
        }
        SyntaxKind::DESC
        | SyntaxKind::RULE
        | SyntaxKind::GOAL
        | SyntaxKind::IF
        | SyntaxKind::ELSEIF
        | SyntaxKind::ELSE
        | SyntaxKind::ACTION
            if first =>
        {
            statement_first(flavor)
        }
        SyntaxKind::GOTO_EXPRESSION | SyntaxKind::INVOCATION_EXPRESSION if first => GOTO_KEYWORD,
        // official `rule Name(...) goto State`
        SyntaxKind::RULE
            if tree::prev_sibling(&element)
                .is_some_and(|sibling| sibling.kind() == SyntaxKind::ARGUMENT_LIST) =>
        {
            GOTO_KEYWORD
        }
        _ => &[],
    }
}

/// Keywords for a caret in whitespace or a comment directly inside `node`
fn trivia_keywords(analysis: &Analysis, node: &SyntaxNode, index: usize) -> &'static [SyntaxKind] {
    let flavor = analysis.flavor();
    match node.kind() {
        SyntaxKind::FILE => BLOCK_KEYWORDS,
        SyntaxKind::MAIN_BLOCK if inside_braces(analysis, node, index) => ATTRIBUTE_KEYWORDS,
        SyntaxKind::STATE_BLOCK if inside_braces(analysis, node, index) => statement_first(flavor),
        kind if flavor == Flavor::Eoserv && EOSERV_STATEMENTS.contains(&kind) => GOTO_KEYWORD,
        SyntaxKind::RULE
            if analysis
                .parse()
                .tokens()
                .previous_significant(index)
                .is_some_and(|token| token.kind == SyntaxKind::R_PAREN) =>
        {
            GOTO_KEYWORD
        }
        _ => &[],
    }
}

/// Whether the hidden token at `index` follows the block's `{`
fn inside_braces(analysis: &Analysis, block: &SyntaxNode, index: usize) -> bool {
    let Some(brace) = tree::significant_children(block)
        .filter_map(NodeOrToken::into_token)
        .find(|token| token.kind() == SyntaxKind::L_BRACE)
    else {
        return false;
    };
    analysis
        .parse()
        .tokens()
        .previous_significant(index)
        .is_some_and(|token| token.offset >= brace.text_range().start())
}

fn reference_completions(analysis: &Analysis, token: &SyntaxToken) -> Vec<CompletionItem> {
    let Some(kind) = analysis.reference_kind(token) else {
        return Vec::new();
    };
    analysis
        .catalog()
        .symbols(kind)
        .into_iter()
        .map(|symbol| symbol_completion(kind, symbol))
        .collect()
}

fn symbol_completion(kind: SymbolKind, symbol: Symbol<'_>) -> CompletionItem {
    match symbol {
        Symbol::Invocable(invocable) => {
            CompletionItem::new(invocable.name, CompletionKind::Function)
                .with_detail(format!("({kind}) {}", invocable.signature()))
                .with_documentation(Some(invocable.documentation.to_string()))
        }
        Symbol::State(state) => CompletionItem::new(state.name.as_str(), CompletionKind::Module)
            .with_detail(format!("({kind}) {}", state.name))
            .with_documentation(
                state
                    .description
                    .as_ref()
                    .map(|description| format!("```eoplus\n{description}\n```")),
            ),
    }
}

/// Keep items whose label contains `prefix` as a subsequence (ignoring case),
/// best `rapidfuzz` ratio first. An empty prefix keeps everything in order.
fn filter_completions(prefix: &str, items: Vec<CompletionItem>) -> Vec<CompletionItem> {
    if prefix.is_empty() {
        return items;
    }

    let needle = prefix.to_lowercase();
    let mut scored: Vec<(f64, CompletionItem)> = items
        .into_iter()
        .filter_map(|item| {
            let haystack = item.label.to_lowercase();
            if !is_subsequence(&needle, &haystack) {
                return None;
            }
            let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
            Some((ratio, item))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.chars().all(|c| haystack.any(|h| h == c))
}
