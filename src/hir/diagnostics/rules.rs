//! The semantic rule engine.
//!
//! One depth-first walk over the tree. Rule nodes are checked before their
//! children; tokens are checked as name references, then as keywords.
//! Nodes produced by error recovery are skipped: their problems were
//! already reported by the parser.

use rustc_hash::FxHashSet;

use super::{Diagnostic, QuickFix};
use crate::base::{Flavor, Position, Span, TextEdit};
use crate::hir::error::AnalysisError;
use crate::hir::reference::{ReferenceClassifier, ReferenceKind};
use crate::hir::suggest::suggest;
use crate::hir::symbols::{InvocableSymbol, Symbol, SymbolCatalog, ValueType};
use crate::parser::{NodeOrToken, Parse, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, Token, tree};
use crate::settings::DiagnosticsSettings;

type Result<T> = std::result::Result<T, AnalysisError>;

/// Accumulators carried through one walk
#[derive(Debug, Default)]
struct WalkState {
    main_exists: bool,
}

struct Checker<'a> {
    parse: &'a Parse,
    source: &'a str,
    settings: &'a DiagnosticsSettings,
    catalog: SymbolCatalog,
    classifier: ReferenceClassifier,
}

/// Run every semantic rule over `parse`, appending to `out`.
///
/// On an internal error the walk stops; diagnostics pushed so far stay.
pub fn check_document(
    parse: &Parse,
    source: &str,
    settings: &DiagnosticsSettings,
    out: &mut Vec<Diagnostic>,
) -> Result<()> {
    let checker = Checker {
        parse,
        source,
        settings,
        catalog: SymbolCatalog::build(parse),
        classifier: ReferenceClassifier::new(parse.flavor()),
    };

    let mut state = WalkState::default();
    checker.walk(&NodeOrToken::Node(parse.syntax()), &mut state, out)?;
    checker.check_main_exists(&state, out);
    Ok(())
}

impl Checker<'_> {
    fn walk(&self, element: &SyntaxElement, state: &mut WalkState, out: &mut Vec<Diagnostic>) -> Result<()> {
        match element {
            NodeOrToken::Token(token) => {
                self.check_name_reference(element, token, out)?;
                self.check_keyword(element, token, out)?;
            }
            NodeOrToken::Node(node) => {
                if node.kind() == SyntaxKind::ERROR {
                    return Ok(());
                }
                self.check_node(node, state, out)?;
                for child in tree::significant_children(node) {
                    self.walk(&child, state, out)?;
                }
            }
        }
        Ok(())
    }

    fn check_node(&self, node: &SyntaxNode, state: &mut WalkState, out: &mut Vec<Diagnostic>) -> Result<()> {
        match node.kind() {
            SyntaxKind::MAIN_BLOCK => self.check_main_block(node, state, out),
            SyntaxKind::STATE_BLOCK => self.check_state_block(node, out),
            SyntaxKind::GOTO_EXPRESSION => self.check_goto_expression(node, out),
            _ => Ok(()),
        }
    }

    // ========================================================================
    // NAME REFERENCES
    // ========================================================================

    fn check_name_reference(
        &self,
        element: &SyntaxElement,
        token: &SyntaxToken,
        out: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let Some(kind) = self.classifier.classify(element) else {
            return Ok(());
        };

        let name = token.text();
        match self.catalog.lookup(kind, name) {
            Some(symbol) => self.check_resolved_reference(element, name, symbol, out),
            None => self.report_unresolved(element, kind, name, out),
        }
    }

    fn report_unresolved(
        &self,
        element: &SyntaxElement,
        kind: ReferenceKind,
        name: &str,
        out: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let range = self.span(element)?;
        let mut message = format!("Cannot find {kind} '{name}'.");
        let mut fixes = Vec::new();

        if let Some(suggestion) = suggest(name, self.catalog.names(kind)) {
            message.push_str(&format!(" Did you mean '{suggestion}'?"));
            fixes.push(
                QuickFix::new(
                    format!("Change spelling to '{suggestion}'"),
                    vec![TextEdit::replace(range, suggestion)],
                )
                .preferred(),
            );
        }

        let block = match kind {
            ReferenceKind::State => tree::ancestor(element, SyntaxKind::STATE_BLOCK),
            _ => None,
        };
        if let Some(block) = block {
            let end = self.span(&NodeOrToken::Node(block))?.end;
            let preferred = fixes.is_empty();
            fixes.push(
                QuickFix::new(
                    format!("Add missing state '{name}'"),
                    vec![TextEdit::insert(end, format!("\n\nstate {name}\n{{\n\n}}"))],
                )
                .with_preferred(preferred),
            );
        }

        tracing::trace!(%kind, name, fixes = fixes.len(), "unresolved reference");
        out.push(Diagnostic::error(range, message).with_fixes(fixes));
        Ok(())
    }

    fn check_resolved_reference(
        &self,
        element: &SyntaxElement,
        name: &str,
        symbol: Symbol<'_>,
        out: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        if let Some(invocable) = symbol.as_invocable() {
            self.check_invocation(element, invocable, out)?;
        }

        let declared = symbol.name();
        if name != declared {
            let range = self.span(element)?;
            out.push(
                Diagnostic::warning(
                    range,
                    format!("Name reference casing should match declaration ('{declared}')."),
                )
                .with_fixes(
                    QuickFix::new(
                        format!("Change casing to '{declared}'"),
                        vec![TextEdit::replace(range, declared)],
                    )
                    .preferred(),
                ),
            );
        }
        Ok(())
    }

    // ========================================================================
    // INVOCATIONS
    // ========================================================================

    fn check_invocation(
        &self,
        element: &SyntaxElement,
        symbol: &InvocableSymbol,
        out: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        if symbol.name == "SetState" {
            out.push(Diagnostic::warning(
                self.span(element)?,
                "'goto' expressions should be preferred over 'SetState'.",
            ));
        }

        let Some(NodeOrToken::Node(list)) = tree::next_sibling(element) else {
            return Ok(());
        };
        if list.kind() != SyntaxKind::ARGUMENT_LIST || tree::child_count(&list) < 2 {
            return Ok(());
        }

        let arguments: Vec<(SyntaxElement, ValueType)> = match tree::child(&list, 1) {
            Some(NodeOrToken::Node(args)) if args.kind() == SyntaxKind::ARGUMENTS => {
                tree::significant_children(&args)
                    .filter_map(|child| self.typed_argument(child))
                    .collect()
            }
            _ => Vec::new(),
        };

        let total = symbol.parameters.len();
        let required = symbol.required_parameter_count();
        let count = arguments.len();

        if count < required || count > total {
            let mut expected = required.to_string();
            if total != required {
                expected.push_str(&format!("-{total}"));
            }
            expected.push_str(" argument");
            if !(required == 1 && total == 1) {
                expected.push('s');
            }

            let range = if count < required {
                Span::new(
                    self.span(element)?.start,
                    self.span(&NodeOrToken::Node(list))?.end,
                )
            } else {
                Span::new(
                    self.span(&arguments[total].0)?.start,
                    self.span(&arguments[count - 1].0)?.end,
                )
            };

            out.push(Diagnostic::error(
                range,
                format!("Expected {expected}, but got {count}."),
            ));
            return Ok(());
        }

        for ((argument, ty), parameter) in arguments.iter().zip(symbol.parameters) {
            if *ty != parameter.ty {
                out.push(Diagnostic::error(
                    self.span(argument)?,
                    format!(
                        "Argument of type '{ty}' is not assignable to parameter of type '{}'.",
                        parameter.ty
                    ),
                ));
            }
        }
        Ok(())
    }

    /// A literal argument and its type; commas and other shapes yield `None`
    fn typed_argument(&self, element: SyntaxElement) -> Option<(SyntaxElement, ValueType)> {
        let node = element.as_node()?;
        if node.kind() != self.argument_kind() {
            return None;
        }
        let literal = tree::child(node, 0)?.into_node()?;
        if literal.kind() != SyntaxKind::LITERAL {
            return None;
        }
        let ty = match tree::child(&literal, 0)?.kind() {
            SyntaxKind::INTEGER => ValueType::Integer,
            SyntaxKind::STRING => ValueType::String,
            _ => return None,
        };
        Some((element, ty))
    }

    fn argument_kind(&self) -> SyntaxKind {
        match self.parse.flavor() {
            Flavor::Official => SyntaxKind::EXPRESSION,
            Flavor::Eoserv => SyntaxKind::ARGUMENT_EXPRESSION,
        }
    }

    // ========================================================================
    // KEYWORDS
    // ========================================================================

    fn check_keyword(&self, element: &SyntaxElement, token: &SyntaxToken, out: &mut Vec<Diagnostic>) -> Result<()> {
        if !token.kind().is_keyword() {
            return Ok(());
        }

        let text = token.text();
        let lowercase = text.to_lowercase();
        if text == lowercase || self.settings.allows_keyword_casing(text) {
            return Ok(());
        }

        let range = self.span(element)?;
        out.push(
            Diagnostic::warning(range, "Keywords should be lowercase.").with_fixes(
                QuickFix::new(
                    format!("Change casing to '{lowercase}'"),
                    vec![TextEdit::replace(range, lowercase.as_str())],
                )
                .preferred(),
            ),
        );
        Ok(())
    }

    // ========================================================================
    // BLOCKS
    // ========================================================================

    fn check_main_block(&self, node: &SyntaxNode, state: &mut WalkState, out: &mut Vec<Diagnostic>) -> Result<()> {
        if state.main_exists {
            let keyword = tree::child(node, 0).ok_or(AnalysisError::MissingChild {
                parent: SyntaxKind::MAIN_BLOCK,
                child: "keyword",
            })?;
            let block = self.span(&NodeOrToken::Node(node.clone()))?;
            out.push(
                Diagnostic::error(self.span(&keyword)?, "Cannot redeclare 'main' block.").with_fixes(
                    QuickFix::new("Remove duplicate 'main' block", vec![TextEdit::delete(block)])
                        .preferred(),
                ),
            );
        }
        state.main_exists = true;

        let mut seen = FxHashSet::default();
        for attribute in tree::significant_children(node)
            .filter(|child| child.kind() == SyntaxKind::MAIN_ATTRIBUTE)
        {
            let Some(keyword) = tree::first_token(&attribute) else {
                continue;
            };
            let name = keyword.text().to_lowercase();
            if !seen.insert(name.clone()) {
                let range = self.span(&attribute)?;
                out.push(
                    Diagnostic::error(range, format!("Cannot specify multiple '{name}' attributes."))
                        .with_fixes(
                            QuickFix::new(
                                format!("Remove duplicate '{name}' attribute"),
                                vec![TextEdit::delete(range)],
                            )
                            .preferred(),
                        ),
                );
            }
        }
        Ok(())
    }

    fn check_state_block(&self, node: &SyntaxNode, out: &mut Vec<Diagnostic>) -> Result<()> {
        let Some(NodeOrToken::Token(identifier)) = tree::child(node, 1) else {
            return Ok(());
        };
        if identifier.kind() != SyntaxKind::IDENT {
            return Ok(());
        }

        let name = identifier.text();
        let mut declarations = self.catalog.states_named(name);
        let first = declarations.next();
        let redeclared = first
            .is_some_and(|state| state.declaration.text_range() != identifier.text_range());
        if declarations.next().is_some() && redeclared {
            out.push(Diagnostic::error(
                self.span(&NodeOrToken::Token(identifier.clone()))?,
                format!("Cannot redeclare state '{name}'."),
            ));
        }

        let mut desc_exists = false;
        for statement in tree::significant_children(node)
            .filter_map(|child| child.into_node())
            .filter(|child| child.kind() == SyntaxKind::STATEMENT)
        {
            let Some(desc) = tree::child(&statement, 0) else {
                continue;
            };
            if desc.kind() != SyntaxKind::DESC {
                continue;
            }
            if desc_exists {
                let range = self.span(&desc)?;
                out.push(
                    Diagnostic::error(range, "Cannot specify multiple state descriptions.").with_fixes(
                        QuickFix::new("Remove duplicate 'desc'", vec![TextEdit::delete(range)]).preferred(),
                    ),
                );
            }
            desc_exists = true;
        }
        Ok(())
    }

    fn check_goto_expression(&self, node: &SyntaxNode, out: &mut Vec<Diagnostic>) -> Result<()> {
        let Some(expression) = node.parent() else {
            return Ok(());
        };
        if expression.kind() != SyntaxKind::EXPRESSION {
            return Ok(());
        }

        let expression = NodeOrToken::Node(expression);
        let conditional = matches!(
            tree::parent_kind(&expression),
            Some(SyntaxKind::RULE | SyntaxKind::GOAL | SyntaxKind::IF | SyntaxKind::ELSEIF)
        );
        if conditional && tree::child_index(&expression) == Some(1) {
            out.push(Diagnostic::error(
                self.span(&NodeOrToken::Node(node.clone()))?,
                "'goto' expression is not allowed here.",
            ));
        }
        Ok(())
    }

    fn check_main_exists(&self, state: &WalkState, out: &mut Vec<Diagnostic>) {
        if state.main_exists {
            return;
        }

        let Some(token) = self.parse.tokens().first_meaningful() else {
            return;
        };
        if "main".starts_with(&token.text.to_lowercase()) {
            return;
        }

        let range = token.span();
        let insert_at = Position::new(range.start.line, range.start.column - self.indent_before(token));

        out.push(
            Diagnostic::error(range, "'main' block is missing.").with_fixes(QuickFix::new(
                "Add a 'main' block",
                vec![TextEdit::insert(insert_at, "main\n{\n\n}\n\n")],
            )),
        );
    }

    /// Spaces and tabs directly before `token` on its line
    fn indent_before(&self, token: &Token) -> u32 {
        let offset = usize::from(token.offset);
        let preceding = self.source.get(..offset).unwrap_or_default();
        let count = preceding
            .chars()
            .rev()
            .take_while(|ch| matches!(ch, ' ' | '\t'))
            .count();
        (count as u32).min(token.column)
    }

    // ========================================================================
    // RANGES
    // ========================================================================

    /// Range from the first to the last significant token of `element`
    fn span(&self, element: &SyntaxElement) -> Result<Span> {
        let first = tree::first_token(element).ok_or(AnalysisError::EmptyNode(element.kind()))?;
        let last = tree::last_token(element).ok_or(AnalysisError::EmptyNode(element.kind()))?;
        let start = self.stream_token(&first)?.span().start;
        let end = self.stream_token(&last)?.span().end;
        Ok(Span::new(start, end))
    }

    fn stream_token(&self, token: &SyntaxToken) -> Result<&Token> {
        self.parse
            .token_of(token)
            .ok_or_else(|| AnalysisError::TokenNotInStream(token.text_range().start().into()))
    }
}
