//! Named atomic propositions.
//!
//! A [`Symbol`] is identified solely by its name: two symbols with the same
//! name are the same proposition. Symbols are ordered by name, so symbol sets
//! collected into a [`BTreeSet`][std::collections::BTreeSet] iterate in a stable order.
use std::fmt;
use std::sync::Arc;

/// An atomic boolean proposition.
///
/// The name is reference-counted, so cloning a symbol (which happens a lot
/// while collecting symbol sets and building models) does not copy the string.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a new symbol with the given name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Symbol(Arc::from(name.as_ref()))
    }

    /// Returns the name of the symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(Arc::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn test_symbol_creation() {
        let a = Symbol::new("A is a Knight");
        assert_eq!(a.name(), "A is a Knight");
        assert_eq!(a.to_string(), "A is a Knight");
    }

    #[test]
    fn test_symbol_equality_by_name() {
        let a1 = Symbol::new("A");
        let a2 = Symbol::from("A".to_string());
        let b = Symbol::from("B");
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert!(a1 < b);

        let set: HashSet<Symbol> = [a1, a2, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
