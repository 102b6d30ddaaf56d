//! Truth assignments.
//!
//! A [`Model`] maps symbols to boolean values. It may be partial: evaluating a
//! sentence that references an unassigned symbol fails with
//! [`LogicError::UnboundSymbol`][crate::error::LogicError::UnboundSymbol].
//!
//! [`Assignments`] enumerates every total model over a fixed set of symbols.
//!
//! ```
//! use entail_rs::model::Assignments;
//! use entail_rs::symbol::Symbol;
//!
//! let symbols = [Symbol::new("P"), Symbol::new("Q")];
//! let models: Vec<_> = Assignments::new(symbols).collect();
//! assert_eq!(models.len(), 4);
//! assert!(models.iter().all(|m| m.len() == 2));
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{Display, Formatter};

use crate::symbol::Symbol;

/// A (possibly partial) assignment of boolean values to symbols.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Model {
    values: BTreeMap<Symbol, bool>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to `symbol`, returning the previous value, if any.
    pub fn assign(&mut self, symbol: Symbol, value: bool) -> Option<bool> {
        self.values.insert(symbol, value)
    }

    /// Removes the assignment of `symbol`, returning its value, if any.
    pub fn unassign(&mut self, symbol: &Symbol) -> Option<bool> {
        self.values.remove(symbol)
    }

    /// Returns the value of `symbol`, or `None` if it is not assigned.
    pub fn get(&self, symbol: &Symbol) -> Option<bool> {
        self.values.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.values.contains_key(symbol)
    }

    /// Number of assigned symbols.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the assignments, ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.values.iter().map(|(symbol, &value)| (symbol, value))
    }

    /// Returns the symbols assigned `true`, ordered by symbol.
    pub fn true_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.values
            .iter()
            .filter(|&(_, &value)| value)
            .map(|(symbol, _)| symbol)
    }
}

impl FromIterator<(Symbol, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Symbol, bool)>>(iter: I) -> Self {
        Model {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Symbol, bool)> for Model {
    fn extend<I: IntoIterator<Item = (Symbol, bool)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for Model {
    type Item = (Symbol, bool);
    type IntoIter = btree_map::IntoIter<Symbol, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", symbol, value)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over all total assignments of a fixed, ordered list of symbols.
///
/// Yields exactly `2^k` models for `k` symbols, starting from the all-`false`
/// model and counting upwards in binary, the last symbol being the least
/// significant digit. With no symbols, the single empty model is produced.
#[derive(Debug, Clone)]
pub struct Assignments {
    symbols: Vec<Symbol>,
    /// Current digit of each symbol.
    digits: Vec<bool>,
    done: bool,
}

impl Assignments {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        let digits = vec![false; symbols.len()];
        Self {
            symbols,
            digits,
            done: false,
        }
    }

    /// The symbols being enumerated, in digit order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Moves to the next assignment. Returns `false` on wrap-around.
    fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            if *digit {
                *digit = false;
            } else {
                *digit = true;
                return true;
            }
        }
        false
    }
}

impl Iterator for Assignments {
    type Item = Model;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let model = self
            .symbols
            .iter()
            .cloned()
            .zip(self.digits.iter().copied())
            .collect();
        self.done = !self.advance();
        Some(model)
    }
}

impl std::iter::FusedIterator for Assignments {}
