//! Reference classification.
//!
//! Whether an identifier names a rule, an action or a state depends only on
//! where it sits in the tree. Each flavor describes those places with a
//! table of [`Shape`]s.

use crate::base::Flavor;
use crate::parser::{SyntaxElement, SyntaxKind, tree};

use super::symbols::SymbolKind;

/// What a name reference points at
pub type ReferenceKind = SymbolKind;

/// Which child of the anchor node holds the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    At(usize),
    Last,
}

/// Where a reference sits
#[derive(Debug, Clone, Copy)]
enum Anchor {
    /// A direct child of a `parent` node
    Child { parent: SyntaxKind, slot: Slot },
    /// The callee of an invocation expression that is child `expression`
    /// of one of `statements`
    Callee {
        statements: &'static [SyntaxKind],
        expression: usize,
    },
}

/// One grammar position that denotes a reference
#[derive(Debug, Clone, Copy)]
struct Shape {
    anchor: Anchor,
    /// Required text (case-insensitive) of the sibling right before the reference
    preceded_by: Option<&'static str>,
    kind: ReferenceKind,
}

const CONDITIONAL_STATEMENTS: &[SyntaxKind] = &[
    SyntaxKind::RULE,
    SyntaxKind::GOAL,
    SyntaxKind::IF,
    SyntaxKind::ELSEIF,
];

const UNCONDITIONAL_STATEMENTS: &[SyntaxKind] = &[SyntaxKind::ACTION, SyntaxKind::ELSE];

const OFFICIAL_SHAPES: &[Shape] = &[
    Shape {
        anchor: Anchor::Child {
            parent: SyntaxKind::RULE,
            slot: Slot::At(1),
        },
        preceded_by: None,
        kind: ReferenceKind::Rule,
    },
    Shape {
        anchor: Anchor::Child {
            parent: SyntaxKind::RULE,
            slot: Slot::At(4),
        },
        preceded_by: Some("goto"),
        kind: ReferenceKind::State,
    },
    Shape {
        anchor: Anchor::Child {
            parent: SyntaxKind::ACTION,
            slot: Slot::At(1),
        },
        preceded_by: None,
        kind: ReferenceKind::Action,
    },
];

const EOSERV_SHAPES: &[Shape] = &[
    Shape {
        anchor: Anchor::Callee {
            statements: CONDITIONAL_STATEMENTS,
            expression: 1,
        },
        preceded_by: None,
        kind: ReferenceKind::Rule,
    },
    Shape {
        anchor: Anchor::Callee {
            statements: CONDITIONAL_STATEMENTS,
            expression: 2,
        },
        preceded_by: None,
        kind: ReferenceKind::Action,
    },
    Shape {
        anchor: Anchor::Callee {
            statements: UNCONDITIONAL_STATEMENTS,
            expression: 1,
        },
        preceded_by: None,
        kind: ReferenceKind::Action,
    },
    Shape {
        anchor: Anchor::Child {
            parent: SyntaxKind::GOTO_EXPRESSION,
            slot: Slot::Last,
        },
        preceded_by: Some("goto"),
        kind: ReferenceKind::State,
    },
];

/// Classifies tree elements as name references for one flavor
#[derive(Debug, Clone, Copy)]
pub struct ReferenceClassifier {
    shapes: &'static [Shape],
}

impl ReferenceClassifier {
    pub fn new(flavor: Flavor) -> Self {
        let shapes = match flavor {
            Flavor::Official => OFFICIAL_SHAPES,
            Flavor::Eoserv => EOSERV_SHAPES,
        };
        Self { shapes }
    }

    /// What `element` refers to, or `None` if it is not a reference
    pub fn classify(&self, element: &SyntaxElement) -> Option<ReferenceKind> {
        let kind = self
            .shapes
            .iter()
            .find(|shape| shape.matches(element))
            .map(|shape| shape.kind);
        if let Some(kind) = kind {
            tracing::trace!(element = %tree::text(element), ?kind, "classified reference");
        }
        kind
    }
}

impl Shape {
    fn matches(&self, element: &SyntaxElement) -> bool {
        let positioned = match self.anchor {
            Anchor::Child { parent, slot } => in_slot(element, parent, slot),
            Anchor::Callee {
                statements,
                expression,
            } => is_callee(element, statements, expression),
        };
        positioned && self.preceded_by.is_none_or(|text| preceded_by(element, text))
    }
}

fn in_slot(element: &SyntaxElement, parent: SyntaxKind, slot: Slot) -> bool {
    let Some(node) = element.parent() else {
        return false;
    };
    if node.kind() != parent {
        return false;
    }
    let Some(index) = tree::child_index(element) else {
        return false;
    };
    match slot {
        Slot::At(expected) => index == expected,
        Slot::Last => index + 1 == tree::child_count(&node),
    }
}

/// `element` is child 0 of an invocation expression, which is child 0 of an
/// expression that is child `expression` of one of `statements`
fn is_callee(element: &SyntaxElement, statements: &[SyntaxKind], expression: usize) -> bool {
    let Some(invocation) = element.parent() else {
        return false;
    };
    if invocation.kind() != SyntaxKind::INVOCATION_EXPRESSION || tree::child_index(element) != Some(0)
    {
        return false;
    }
    let invocation = SyntaxElement::from(invocation);
    if tree::child_index(&invocation) != Some(0) {
        return false;
    }
    let Some(wrapper) = invocation.parent() else {
        return false;
    };
    if wrapper.kind() != SyntaxKind::EXPRESSION {
        return false;
    }
    let wrapper = SyntaxElement::from(wrapper);
    let Some(statement) = tree::parent_kind(&wrapper) else {
        return false;
    };
    statements.contains(&statement) && tree::child_index(&wrapper) == Some(expression)
}

fn preceded_by(element: &SyntaxElement, text: &str) -> bool {
    tree::prev_sibling(element).is_some_and(|sibling| tree::text(&sibling).eq_ignore_ascii_case(text))
}
