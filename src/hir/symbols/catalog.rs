use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{InvocableSymbol, StateSymbol, Symbol, SymbolKind, builtins, names_match};
use crate::base::Flavor;
use crate::parser::{Parse, SyntaxKind, SyntaxNode, tree};

/// Built-in symbols of a flavor plus the states declared in one document.
///
/// Duplicate names are kept; lookups return the first match in catalog
/// order (states in document order, then table order for built-ins).
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    flavor: Flavor,
    states: Vec<StateSymbol>,
    /// Lowercased state name -> indices into `states`
    state_index: FxHashMap<SmolStr, Vec<usize>>,
    actions: Vec<&'static InvocableSymbol>,
    rules: Vec<&'static InvocableSymbol>,
}

impl SymbolCatalog {
    /// Collect state declarations from `parse` and merge in the built-ins.
    pub fn build(parse: &Parse) -> Self {
        let flavor = parse.flavor();
        let mut catalog = Self::builtins(flavor);

        for block in parse
            .syntax()
            .descendants()
            .filter(|node| node.kind() == SyntaxKind::STATE_BLOCK)
        {
            if let Some(state) = state_from_block(&block) {
                catalog.push_state(state);
            }
        }

        tracing::debug!(
            %flavor,
            states = catalog.states.len(),
            actions = catalog.actions.len(),
            rules = catalog.rules.len(),
            "built symbol catalog"
        );

        catalog
    }

    /// A catalog holding only the built-ins of `flavor`
    pub fn builtins(flavor: Flavor) -> Self {
        Self {
            flavor,
            states: Vec::new(),
            state_index: FxHashMap::default(),
            actions: builtins::actions(flavor).collect(),
            rules: builtins::rules(flavor).collect(),
        }
    }

    fn push_state(&mut self, state: StateSymbol) {
        self.state_index
            .entry(fold_case(&state.name))
            .or_default()
            .push(self.states.len());
        self.states.push(state);
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn states(&self) -> &[StateSymbol] {
        &self.states
    }

    pub fn actions(&self) -> &[&'static InvocableSymbol] {
        &self.actions
    }

    pub fn rules(&self) -> &[&'static InvocableSymbol] {
        &self.rules
    }

    /// All symbols of `kind`, in catalog order
    pub fn symbols(&self, kind: SymbolKind) -> Vec<Symbol<'_>> {
        match kind {
            SymbolKind::State => self.states.iter().map(Symbol::State).collect(),
            SymbolKind::Action => self.actions.iter().map(|&a| Symbol::Invocable(a)).collect(),
            SymbolKind::Rule => self.rules.iter().map(|&r| Symbol::Invocable(r)).collect(),
        }
    }

    /// Names of all symbols of `kind`, in catalog order
    pub fn names(&self, kind: SymbolKind) -> Vec<&str> {
        self.symbols(kind).iter().map(|symbol| symbol.name()).collect()
    }

    /// First symbol of `kind` whose name matches case-insensitively
    pub fn lookup(&self, kind: SymbolKind, name: &str) -> Option<Symbol<'_>> {
        match kind {
            SymbolKind::State => self.states_named(name).next().map(Symbol::State),
            SymbolKind::Action => find_invocable(&self.actions, name),
            SymbolKind::Rule => find_invocable(&self.rules, name),
        }
    }

    /// Every state declared as `name` (case-insensitive), in document order
    pub fn states_named(&self, name: &str) -> impl Iterator<Item = &StateSymbol> {
        self.state_index
            .get(&fold_case(name))
            .into_iter()
            .flatten()
            .filter_map(|&index| self.states.get(index))
    }
}

fn find_invocable(symbols: &[&'static InvocableSymbol], name: &str) -> Option<Symbol<'static>> {
    symbols
        .iter()
        .copied()
        .find(|symbol| names_match(symbol.name, name))
        .map(Symbol::Invocable)
}

fn fold_case(name: &str) -> SmolStr {
    name.to_lowercase().into()
}

/// State named by the block's identifier, described by its first `desc`
fn state_from_block(block: &SyntaxNode) -> Option<StateSymbol> {
    let declaration = tree::significant_children(block)
        .filter_map(|child| child.into_token())
        .find(|token| token.kind() == SyntaxKind::IDENT)?;

    let description = block
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::DESC)
        .find_map(|desc| {
            tree::significant_children(&desc)
                .filter_map(|child| child.into_token())
                .find(|token| token.kind() == SyntaxKind::STRING)
        })
        .map(|literal| SmolStr::new(literal.text()));

    Some(StateSymbol {
        name: SmolStr::new(declaration.text()),
        declaration,
        description,
    })
}
