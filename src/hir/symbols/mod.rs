//! Symbols visible in an EO+ document.
//!
//! Built-in rules and actions live in static tables ([`builtins`]); states
//! are discovered per document by the [`SymbolCatalog`] builder.

pub mod builtins;
mod catalog;

use std::fmt;

use smol_str::SmolStr;

use crate::parser::SyntaxToken;

pub use catalog::SymbolCatalog;

/// What kind of thing a symbol is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Rule,
    Action,
    State,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Rule => "rule",
            SymbolKind::Action => "action",
            SymbolKind::State => "state",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a parameter, and the type of a literal argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    String,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub ty: ValueType,
    pub documentation: &'static str,
    pub optional: bool,
}

impl Parameter {
    /// `name: type`, or `name?: type` when optional
    pub fn signature(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, marker, self.ty)
    }
}

/// A built-in rule or action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocableSymbol {
    pub kind: SymbolKind,
    pub name: &'static str,
    pub documentation: &'static str,
    pub parameters: &'static [Parameter],
}

impl InvocableSymbol {
    /// Length of the non-optional parameter prefix
    pub fn required_parameter_count(&self) -> usize {
        self.parameters
            .iter()
            .take_while(|parameter| !parameter.optional)
            .count()
    }

    /// `Name(a: integer, b?: string)`
    pub fn signature(&self) -> String {
        let parameters: Vec<String> = self.parameters.iter().map(Parameter::signature).collect();
        format!("{}({})", self.name, parameters.join(", "))
    }
}

/// A state declared in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSymbol {
    pub name: SmolStr,
    /// The state's name token
    pub declaration: SyntaxToken,
    /// Text of the first `desc` string literal, quotes included
    pub description: Option<SmolStr>,
}

/// Any symbol in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    Invocable(&'static InvocableSymbol),
    State(&'a StateSymbol),
}

impl<'a> Symbol<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Symbol::Invocable(invocable) => invocable.name,
            Symbol::State(state) => state.name.as_str(),
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Invocable(invocable) => invocable.kind,
            Symbol::State(_) => SymbolKind::State,
        }
    }

    pub fn as_invocable(&self) -> Option<&'static InvocableSymbol> {
        match *self {
            Symbol::Invocable(invocable) => Some(invocable),
            Symbol::State(_) => None,
        }
    }

    pub fn as_state(&self) -> Option<&'a StateSymbol> {
        match *self {
            Symbol::State(state) => Some(state),
            Symbol::Invocable(_) => None,
        }
    }
}

/// Case-insensitive name comparison used for every symbol lookup
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
