//! Propositional-logic sentences.
//!
//! A [`Sentence`] is a node of an expression tree over named [`Symbol`]s.
//! The set of node kinds is closed: a symbol leaf, a negation, a conjunction,
//! a disjunction, an implication and a biconditional.
//!
//! Every sentence can be
//!
//! - **evaluated** under a (possibly partial) [`Model`], failing if it
//!   references a symbol the model does not assign;
//! - asked for the **symbols** it references;
//! - rendered as a **formula** string using the glyphs `¬`, `∧`, `∨`, `⇒`, `⇔`.
//!
//! Equality and hashing are structural, so sentences can be used as map keys.
//! Note that the operand order of conjunctions and disjunctions is significant:
//! `A ∧ B` and `B ∧ A` are *different* sentences, even though they are
//! logically equivalent.
//!
//! # Example
//!
//! ```
//! use entail_rs::model::Model;
//! use entail_rs::sentence::Sentence;
//! use entail_rs::symbol::Symbol;
//!
//! let rain = Symbol::new("rain");
//! let wet = Symbol::new("wet");
//!
//! let f = Sentence::implies(&rain, &wet);
//! assert_eq!(f.to_string(), "rain ⇒ wet");
//!
//! let model: Model = [(rain, true), (wet, false)].into_iter().collect();
//! assert_eq!(f.evaluate(&model), Ok(false));
//! ```

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::error::LogicError;
use crate::model::Model;
use crate::symbol::Symbol;

/// Glyph for negation.
pub const NOT: char = '¬';
/// Glyph for conjunction.
pub const AND: char = '∧';
/// Glyph for disjunction.
pub const OR: char = '∨';
/// Glyph for implication.
pub const IMPLIES: char = '⇒';
/// Glyph for biconditional.
pub const IFF: char = '⇔';

const CONNECTIVES: [char; 5] = [NOT, AND, OR, IMPLIES, IFF];

/// A propositional-logic sentence.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Sentence {
    /// Atomic proposition.
    Symbol(Symbol),
    /// Negation of the operand.
    Not(Box<Sentence>),
    /// Conjunction of the operands, in order.
    And(Vec<Sentence>),
    /// Disjunction of the operands, in order.
    Or(Vec<Sentence>),
    /// Antecedent and consequent.
    Implication(Box<Sentence>, Box<Sentence>),
    /// Left and right sides.
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Sentence::Symbol(Symbol::new(name))
    }

    pub fn not(operand: impl Into<Sentence>) -> Self {
        Sentence::Not(Box::new(operand.into()))
    }

    /// Creates a conjunction of the given operands.
    ///
    /// An empty conjunction can be built (and grown later with [`add`](Self::add)),
    /// but it does not pass [`validate`](Self::validate).
    pub fn and<S>(conjuncts: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<Sentence>,
    {
        Sentence::And(conjuncts.into_iter().map(Into::into).collect())
    }

    /// Creates a disjunction of the given operands.
    ///
    /// Same remarks as for [`and`](Self::and) apply.
    pub fn or<S>(disjuncts: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<Sentence>,
    {
        Sentence::Or(disjuncts.into_iter().map(Into::into).collect())
    }

    pub fn implies(antecedent: impl Into<Sentence>, consequent: impl Into<Sentence>) -> Self {
        Sentence::Implication(Box::new(antecedent.into()), Box::new(consequent.into()))
    }

    pub fn iff(left: impl Into<Sentence>, right: impl Into<Sentence>) -> Self {
        Sentence::Biconditional(Box::new(left.into()), Box::new(right.into()))
    }

    /// Appends an operand to a conjunction or disjunction.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::NotExtensible`] if `self` is neither a conjunction nor a disjunction.
    pub fn add(&mut self, operand: impl Into<Sentence>) -> Result<(), LogicError> {
        match self {
            Sentence::And(operands) | Sentence::Or(operands) => {
                operands.push(operand.into());
                Ok(())
            }
            _ => Err(LogicError::NotExtensible {
                formula: self.formula(),
            }),
        }
    }

    /// Returns `true` for every node kind except [`Sentence::Symbol`].
    pub fn is_compound(&self) -> bool {
        !matches!(self, Sentence::Symbol(_))
    }

    /// Checks that every conjunction and disjunction in the tree has at least one operand.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::EmptyConnective`] for the first empty node found (pre-order).
    pub fn validate(&self) -> Result<(), LogicError> {
        match self {
            Sentence::Symbol(_) => Ok(()),
            Sentence::Not(operand) => operand.validate(),
            Sentence::And(conjuncts) => validate_operands("And", conjuncts),
            Sentence::Or(disjuncts) => validate_operands("Or", disjuncts),
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                left.validate()?;
                right.validate()
            }
        }
    }

    /// Evaluates the sentence under the given model.
    ///
    /// All operands of a node are evaluated, regardless of the values of their
    /// siblings, so a missing symbol anywhere in the tree is always reported.
    ///
    /// This does not [`validate`](Self::validate) the tree: an empty conjunction
    /// evaluates to `true` and an empty disjunction to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::UnboundSymbol`] if the model has no value for a referenced symbol.
    pub fn evaluate(&self, model: &Model) -> Result<bool, LogicError> {
        match self {
            Sentence::Symbol(symbol) => model
                .get(symbol)
                .ok_or_else(|| LogicError::UnboundSymbol(symbol.clone())),
            Sentence::Not(operand) => Ok(!operand.evaluate(model)?),
            Sentence::And(conjuncts) => {
                let mut result = true;
                for conjunct in conjuncts {
                    result &= conjunct.evaluate(model)?;
                }
                Ok(result)
            }
            Sentence::Or(disjuncts) => {
                let mut result = false;
                for disjunct in disjuncts {
                    result |= disjunct.evaluate(model)?;
                }
                Ok(result)
            }
            Sentence::Implication(antecedent, consequent) => {
                let antecedent = antecedent.evaluate(model)?;
                let consequent = consequent.evaluate(model)?;
                Ok(!antecedent || consequent)
            }
            Sentence::Biconditional(left, right) => {
                let left = left.evaluate(model)?;
                let right = right.evaluate(model)?;
                Ok(left == right)
            }
        }
    }

    /// Returns the set of symbols referenced anywhere in the sentence.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, acc: &mut BTreeSet<Symbol>) {
        match self {
            Sentence::Symbol(symbol) => {
                acc.insert(symbol.clone());
            }
            Sentence::Not(operand) => operand.collect_symbols(acc),
            Sentence::And(operands) | Sentence::Or(operands) => {
                for operand in operands {
                    operand.collect_symbols(acc);
                }
            }
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                left.collect_symbols(acc);
                right.collect_symbols(acc);
            }
        }
    }

    /// Renders the sentence as a formula.
    ///
    /// Compound sub-formulas are [parenthesized](parenthesize), bare symbol names never are.
    /// A conjunction or disjunction with a single operand renders as that operand.
    pub fn formula(&self) -> String {
        match self {
            Sentence::Symbol(symbol) => symbol.name().to_string(),
            Sentence::Not(operand) => format!("{}{}", NOT, parenthesize(&operand.formula())),
            Sentence::And(conjuncts) => join_operands(conjuncts, AND),
            Sentence::Or(disjuncts) => join_operands(disjuncts, OR),
            Sentence::Implication(antecedent, consequent) => format!(
                "{} {} {}",
                parenthesize(&antecedent.formula()),
                IMPLIES,
                parenthesize(&consequent.formula())
            ),
            Sentence::Biconditional(left, right) => format!(
                "{} {} {}",
                parenthesize(&left.formula()),
                IFF,
                parenthesize(&right.formula())
            ),
        }
    }
}

fn validate_operands(connective: &'static str, operands: &[Sentence]) -> Result<(), LogicError> {
    if operands.is_empty() {
        return Err(LogicError::EmptyConnective { connective });
    }
    for operand in operands {
        operand.validate()?;
    }
    Ok(())
}

fn join_operands(operands: &[Sentence], glyph: char) -> String {
    if let [single] = operands {
        return single.formula();
    }
    operands
        .iter()
        .map(|operand| parenthesize(&operand.formula()).into_owned())
        .collect::<Vec<_>>()
        .join(&format!(" {} ", glyph))
}

/// Wraps a rendered formula in parentheses, unless it does not need them.
///
/// The formula is returned unchanged when it is empty, when it contains no
/// connective glyph (a bare symbol name, spaces allowed), or when it is
/// already enclosed in one balanced pair of outer parentheses.
/// For balanced input the function is idempotent.
///
/// ```
/// use entail_rs::sentence::parenthesize;
///
/// assert_eq!(parenthesize("A is a Knight"), "A is a Knight");
/// assert_eq!(parenthesize("A ∧ B"), "(A ∧ B)");
/// assert_eq!(parenthesize("(A ∧ B)"), "(A ∧ B)");
/// assert_eq!(parenthesize("(A) ∧ (B)"), "((A) ∧ (B))");
/// ```
pub fn parenthesize(formula: &str) -> Cow<'_, str> {
    if formula.is_empty() || !formula.contains(&CONNECTIVES[..]) || is_enclosed(formula) {
        Cow::Borrowed(formula)
    } else {
        Cow::Owned(format!("({})", formula))
    }
}

/// Checks whether the outer parentheses of `formula` match each other.
fn is_enclosed(formula: &str) -> bool {
    let Some(inner) = formula.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return false;
    };
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

impl Display for Sentence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formula())
    }
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Symbol(symbol)
    }
}

impl From<&Symbol> for Sentence {
    fn from(symbol: &Symbol) -> Self {
        Sentence::Symbol(symbol.clone())
    }
}
