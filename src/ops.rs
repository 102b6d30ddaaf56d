//! Operator sugar for building sentences.
//!
//! | Operator | Sentence                |
//! |----------|-------------------------|
//! | `!a`     | `Not(a)`                |
//! | `a & b`  | `And(a, b)`             |
//! | `a \| b` | `Or(a, b)`              |
//! | `a % b`  | `Biconditional(a, b)`   |
//!
//! Chains are flattened on the left: `a & b & c` is the single conjunction
//! `And(a, b, c)`, not `And(And(a, b), c)`.
//!
//! ```
//! use entail_rs::sentence::Sentence;
//!
//! let p = Sentence::symbol("P");
//! let q = Sentence::symbol("Q");
//! let r = Sentence::symbol("R");
//!
//! let f = p.clone() & !q.clone() & r.clone();
//! assert_eq!(f, Sentence::and([p, Sentence::not(q), r]));
//! assert_eq!(f.to_string(), "P ∧ (¬Q) ∧ R");
//! ```

use std::ops::{BitAnd, BitOr, Not, Rem};

use crate::sentence::Sentence;
use crate::symbol::Symbol;

impl Not for Sentence {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::Not(Box::new(self))
    }
}

impl BitAnd for Sentence {
    type Output = Sentence;

    fn bitand(self, rhs: Self) -> Self::Output {
        match self {
            Sentence::And(mut conjuncts) => {
                conjuncts.push(rhs);
                Sentence::And(conjuncts)
            }
            lhs => Sentence::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Sentence {
    type Output = Sentence;

    fn bitor(self, rhs: Self) -> Self::Output {
        match self {
            Sentence::Or(mut disjuncts) => {
                disjuncts.push(rhs);
                Sentence::Or(disjuncts)
            }
            lhs => Sentence::Or(vec![lhs, rhs]),
        }
    }
}

impl Rem for Sentence {
    type Output = Sentence;

    fn rem(self, rhs: Self) -> Self::Output {
        Sentence::iff(self, rhs)
    }
}

impl Not for &Symbol {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_not() {
        let p = Symbol::new("P");
        assert_eq!(!Sentence::from(&p), Sentence::not(&p));
        assert_eq!(!&p, Sentence::not(&p));
    }

    #[test]
    fn test_and_flattens() {
        let [a, b, c] = ["A", "B", "C"].map(Sentence::symbol);
        let f = a.clone() & b.clone() & c.clone();
        assert_eq!(f, Sentence::and([a.clone(), b.clone(), c.clone()]));

        // Only the left operand is flattened.
        let g = a.clone() & (b.clone() & c.clone());
        assert_eq!(g, Sentence::and([a, Sentence::and([b, c])]));
    }

    #[test]
    fn test_or_flattens() {
        let [a, b, c] = ["A", "B", "C"].map(Sentence::symbol);
        let f = a.clone() | b.clone() | c.clone();
        assert_eq!(f, Sentence::or([a, b, c]));
    }

    #[test]
    fn test_iff() {
        let [a, b] = ["A", "B"].map(Sentence::symbol);
        assert_eq!(a.clone() % b.clone(), Sentence::iff(a, b));
    }

    #[test]
    fn test_mixed() {
        let [a, b] = ["A", "B"].map(Sentence::symbol);
        let f = (a.clone() | b.clone()) & !(a.clone() & b.clone());
        assert_eq!(f.to_string(), "(A ∨ B) ∧ (¬(A ∧ B))");
    }
}
