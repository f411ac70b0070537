use hack_arch::Tables;
use indexmap::{map::Entry, IndexMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    Fixed,
    Label,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub kind: Ident,
    pub value: u16,
    /// Source line of the declaration, `None` for predefined symbols
    pub line: Option<usize>,
}

/// Symbol table of one assembly run. Entries are kept in registration order
/// and are never overwritten once set.
#[derive(Debug, Clone, Default)]
pub struct Idents(IndexMap<String, Symbol>);

impl Idents {
    pub fn new() -> Self {
        Idents(IndexMap::new())
    }

    /// Table seeded with the predefined symbols of `tables`.
    pub fn with_fixed(tables: &Tables) -> Self {
        let mut idents = Idents::new();
        for (name, value) in tables.symbols() {
            idents.insert(name.to_string(), Ident::Fixed, value, None);
        }
        idents
    }

    /// Register `name`. If it is already known, the table is left unchanged and
    /// the existing entry is returned.
    pub fn insert(
        &mut self,
        name: String,
        kind: Ident,
        value: u16,
        line: Option<usize>,
    ) -> Option<Symbol> {
        match self.0.entry(name) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Symbol { kind, value, line });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|sym| sym.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.0.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
