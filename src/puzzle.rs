//! Knights and Knaves puzzles.
//!
//! Every character is either a knight, who always tells the truth, or a knave,
//! who always lies. Given what the characters say, the goal is to decide who
//! is what. Each puzzle is encoded as a single knowledge base:
//!
//! - the structure of the problem: every character is a knight exactly when
//!   they are not a knave;
//! - the statements: if `X` says `S`, then `X` is a knight exactly when `S`
//!   holds.
//!
//! The reasoning itself is left to [`model_check`][crate::check::model_check].

use crate::check::entailed_symbols;
use crate::error::LogicError;
use crate::sentence::Sentence;
use crate::symbol::Symbol;

/// The propositions about the three characters A, B and C.
#[derive(Debug, Clone)]
pub struct Characters {
    pub a_knight: Symbol,
    pub a_knave: Symbol,
    pub b_knight: Symbol,
    pub b_knave: Symbol,
    pub c_knight: Symbol,
    pub c_knave: Symbol,
}

impl Default for Characters {
    fn default() -> Self {
        Self::new()
    }
}

impl Characters {
    pub fn new() -> Self {
        Self {
            a_knight: Symbol::new("A is a Knight"),
            a_knave: Symbol::new("A is a Knave"),
            b_knight: Symbol::new("B is a Knight"),
            b_knave: Symbol::new("B is a Knave"),
            c_knight: Symbol::new("C is a Knight"),
            c_knave: Symbol::new("C is a Knave"),
        }
    }

    /// All six propositions, in the order they are reported.
    pub fn symbols(&self) -> [Symbol; 6] {
        [
            self.a_knight.clone(),
            self.a_knave.clone(),
            self.b_knight.clone(),
            self.b_knave.clone(),
            self.c_knight.clone(),
            self.c_knave.clone(),
        ]
    }
}

/// A named knowledge base.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: String,
    pub knowledge: Sentence,
}

impl Puzzle {
    pub fn new(name: impl Into<String>, knowledge: Sentence) -> Self {
        Self {
            name: name.into(),
            knowledge,
        }
    }

    /// Returns `true` if the knowledge base is still an empty conjunction.
    pub fn is_empty(&self) -> bool {
        matches!(&self.knowledge, Sentence::And(conjuncts) if conjuncts.is_empty())
    }

    /// Returns the queries entailed by the knowledge base, in their original order.
    pub fn solve(&self, queries: &[Symbol]) -> Result<Vec<Symbol>, LogicError> {
        entailed_symbols(&self.knowledge, queries)
    }
}

/// Exactly one of `knight` and `knave` holds.
fn exactly_one(knight: &Symbol, knave: &Symbol) -> Sentence {
    Sentence::iff(knight, Sentence::not(knave))
}

/// The speaker tells the truth iff they are a knight.
fn says(speaker: &Symbol, statement: impl Into<Sentence>) -> Sentence {
    Sentence::iff(speaker, statement)
}

/// A says "I am both a knight and a knave."
pub fn puzzle0(c: &Characters) -> Puzzle {
    let knowledge = Sentence::and([
        exactly_one(&c.a_knight, &c.a_knave),
        says(&c.a_knight, Sentence::and([&c.a_knave, &c.a_knight])),
    ]);
    Puzzle::new("Puzzle 0", knowledge)
}

/// A says "We are both knaves." B says nothing.
pub fn puzzle1(c: &Characters) -> Puzzle {
    let knowledge = Sentence::and([
        exactly_one(&c.a_knight, &c.a_knave),
        exactly_one(&c.b_knight, &c.b_knave),
        says(&c.a_knight, Sentence::and([&c.a_knave, &c.b_knave])),
    ]);
    Puzzle::new("Puzzle 1", knowledge)
}

/// A says "We are the same kind." B says "We are of different kinds."
pub fn puzzle2(c: &Characters) -> Puzzle {
    let same = Sentence::or([
        Sentence::and([&c.a_knight, &c.b_knight]),
        Sentence::and([&c.a_knave, &c.b_knave]),
    ]);
    let different = Sentence::or([
        Sentence::and([&c.a_knight, &c.b_knave]),
        Sentence::and([&c.a_knave, &c.b_knight]),
    ]);
    let knowledge = Sentence::and([
        exactly_one(&c.a_knight, &c.a_knave),
        exactly_one(&c.b_knight, &c.b_knave),
        says(&c.a_knight, same),
        says(&c.b_knight, different),
    ]);
    Puzzle::new("Puzzle 2", knowledge)
}

/// A says either "I am a knight." or "I am a knave.", but you don't know which.
/// B says "A said 'I am a knave'." B says "C is a knave." C says "A is a knight."
pub fn puzzle3(c: &Characters) -> Puzzle {
    let a_said_knight = says(&c.a_knight, &c.a_knight);
    let a_said_knave = says(&c.a_knight, &c.a_knave);
    let knowledge = Sentence::and([
        exactly_one(&c.a_knight, &c.a_knave),
        exactly_one(&c.b_knight, &c.b_knave),
        exactly_one(&c.c_knight, &c.c_knave),
        Sentence::or([a_said_knight, a_said_knave.clone()]),
        says(&c.b_knight, a_said_knave),
        says(&c.b_knight, &c.c_knave),
        says(&c.c_knight, &c.a_knight),
    ]);
    Puzzle::new("Puzzle 3", knowledge)
}

/// All puzzles, in order.
pub fn all(c: &Characters) -> Vec<Puzzle> {
    vec![puzzle0(c), puzzle1(c), puzzle2(c), puzzle3(c)]
}
