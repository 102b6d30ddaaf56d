//! # entail-rs: propositional logic and model checking in Rust
//!
//! **`entail-rs`** is a small library for building propositional-logic sentences
//! and deciding entailment between them by exhaustive model checking.
//!
//! ## What is entailment?
//!
//! A knowledge base `K` *entails* a query `Q` (written `K ⊨ Q`) when `Q` is true in
//! every model of `K`, that is, in every truth assignment that makes `K` true.
//! For a handful of symbols this can be decided by simply enumerating all
//! assignments, which is exactly what this crate does.
//!
//! ## Key Features
//!
//! - **Closed sentence type**: [`Sentence`][crate::sentence::Sentence] is an enum with
//!   six variants (symbol, `¬`, `∧`, `∨`, `⇒`, `⇔`), with structural equality and hashing.
//! - **Readable formulas**: sentences render with conventional glyphs and
//!   parentheses only around compound sub-formulas.
//! - **Explicit errors**: evaluating under a model that misses a symbol returns
//!   [`LogicError::UnboundSymbol`][crate::error::LogicError::UnboundSymbol] instead of panicking.
//! - **Model checking**: entailment, counter-models, model enumeration and counting.
//!
//! ## Basic Usage
//!
//! ```rust
//! use entail_rs::check::model_check;
//! use entail_rs::sentence::Sentence;
//! use entail_rs::symbol::Symbol;
//!
//! // 1. Create symbols
//! let knight = Symbol::new("A is a Knight");
//! let knave = Symbol::new("A is a Knave");
//!
//! // 2. Build the knowledge base:
//! //    A is either a knight or a knave, and A says "I am both a knight and a knave."
//! let knowledge = Sentence::and([
//!     Sentence::iff(&knight, Sentence::not(&knave)),
//!     Sentence::iff(&knight, Sentence::and([&knave, &knight])),
//! ]);
//!
//! // 3. Ask what follows
//! assert_eq!(model_check(&knowledge, &Sentence::from(&knave)), Ok(true));
//! assert_eq!(model_check(&knowledge, &Sentence::from(&knight)), Ok(false));
//! ```
//!
//! ## Core Components
//!
//! - **[`sentence`]**: the [`Sentence`][crate::sentence::Sentence] tree, evaluation and rendering.
//! - **[`model`]**: truth assignments and their exhaustive enumeration.
//! - **[`check`]**: entailment and related model-checking queries.
//! - **[`puzzle`]**: Knights and Knaves knowledge bases.

pub mod check;
pub mod error;
pub mod model;
pub mod ops;
pub mod puzzle;
pub mod sentence;
pub mod symbol;
