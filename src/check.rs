//! Entailment by model checking.
//!
//! A knowledge base `K` *entails* a query `Q` when `Q` is true in every model
//! that makes `K` true. [`model_check`] decides this by brute force: it
//! enumerates all `2^k` total assignments over the `k` symbols referenced by
//! `K` or `Q`, and looks for a *counter-model*, i.e. a model where `K` holds
//! but `Q` does not. The search stops at the first counter-model found.
//!
//! If `K` is unsatisfiable, no model makes it true, so it entails every query.
//!
//! # Example
//!
//! ```
//! use entail_rs::check::{find_counter_model, model_check};
//! use entail_rs::sentence::Sentence;
//! use entail_rs::symbol::Symbol;
//!
//! let p = Symbol::new("P");
//! let q = Symbol::new("Q");
//! let knowledge = Sentence::or([&p, &q]);
//!
//! assert_eq!(model_check(&knowledge, &Sentence::from(&p)), Ok(false));
//! assert_eq!(model_check(&knowledge, &knowledge), Ok(true));
//!
//! let counter = find_counter_model(&knowledge, &Sentence::from(&p)).unwrap().unwrap();
//! assert_eq!(counter.get(&p), Some(false));
//! assert_eq!(counter.get(&q), Some(true));
//! ```
//!
//! # Performance
//!
//! Every operation here is exponential in the number of distinct symbols.
//! This is fine for puzzle-sized knowledge bases (a dozen symbols or so).

use std::collections::BTreeSet;

use log::{debug, trace};
use num_bigint::BigUint;

use crate::error::LogicError;
use crate::model::{Assignments, Model};
use crate::sentence::Sentence;
use crate::symbol::Symbol;

/// Returns `true` iff `knowledge` entails `query`.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if either sentence fails [`Sentence::validate`].
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> Result<bool, LogicError> {
    Ok(find_counter_model(knowledge, query)?.is_none())
}

/// Returns a model in which `knowledge` is true and `query` is false, if one exists.
///
/// The model assigns exactly the symbols of `knowledge` and `query`.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if either sentence fails [`Sentence::validate`].
pub fn find_counter_model(
    knowledge: &Sentence,
    query: &Sentence,
) -> Result<Option<Model>, LogicError> {
    knowledge.validate()?;
    query.validate()?;

    let mut symbols = knowledge.symbols();
    symbols.extend(query.symbols());
    debug!("model checking '{}' against {} symbols", query, symbols.len());

    for model in Assignments::new(symbols) {
        if knowledge.evaluate(&model)? && !query.evaluate(&model)? {
            trace!("counter-model for '{}': {}", query, model);
            return Ok(Some(model));
        }
    }
    Ok(None)
}

/// Returns the candidates entailed by `knowledge`, in their original order.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if `knowledge` fails [`Sentence::validate`].
pub fn entailed_symbols(
    knowledge: &Sentence,
    candidates: &[Symbol],
) -> Result<Vec<Symbol>, LogicError> {
    let mut entailed = Vec::new();
    for candidate in candidates {
        if model_check(knowledge, &Sentence::from(candidate))? {
            entailed.push(candidate.clone());
        }
    }
    debug!("{} of {} candidates entailed", entailed.len(), candidates.len());
    Ok(entailed)
}

/// Returns all models of `knowledge` over its own symbols.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if `knowledge` fails [`Sentence::validate`].
pub fn consistent_models(knowledge: &Sentence) -> Result<Vec<Model>, LogicError> {
    knowledge.validate()?;
    let mut models = Vec::new();
    for model in Assignments::new(knowledge.symbols()) {
        if knowledge.evaluate(&model)? {
            models.push(model);
        }
    }
    Ok(models)
}

/// Counts the models of `knowledge` over its own symbols.
///
/// Unlike [`consistent_models`], the models are not kept in memory.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if `knowledge` fails [`Sentence::validate`].
pub fn count_models(knowledge: &Sentence) -> Result<BigUint, LogicError> {
    count_models_over(knowledge, &knowledge.symbols())
}

/// Counts the models of `knowledge` over the given symbols.
///
/// Symbols in `symbols` that `knowledge` does not mention double the count each.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if `knowledge` fails [`Sentence::validate`],
/// or [`LogicError::UnboundSymbol`] if `symbols` misses one of its symbols.
pub fn count_models_over(
    knowledge: &Sentence,
    symbols: &BTreeSet<Symbol>,
) -> Result<BigUint, LogicError> {
    knowledge.validate()?;
    let mut count = BigUint::ZERO;
    for model in Assignments::new(symbols.iter().cloned()) {
        if knowledge.evaluate(&model)? {
            count += 1u32;
        }
    }
    debug!("'{}' has {} models over {} symbols", knowledge, count, symbols.len());
    Ok(count)
}

/// Returns `true` iff some assignment makes `sentence` true.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if `sentence` fails [`Sentence::validate`].
pub fn is_satisfiable(sentence: &Sentence) -> Result<bool, LogicError> {
    sentence.validate()?;
    for model in Assignments::new(sentence.symbols()) {
        if sentence.evaluate(&model)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns `true` iff every assignment makes `sentence` true.
///
/// # Errors
///
/// Returns [`LogicError::EmptyConnective`] if `sentence` fails [`Sentence::validate`].
pub fn is_valid(sentence: &Sentence) -> Result<bool, LogicError> {
    sentence.validate()?;
    for model in Assignments::new(sentence.symbols()) {
        if !sentence.evaluate(&model)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn atoms<const N: usize>(names: [&str; N]) -> [Sentence; N] {
        names.map(Sentence::symbol)
    }

    #[test]
    fn test_knight_and_knave() {
        // A says "I am both a knight and a knave."
        let [knight, knave] = atoms(["A is a Knight", "A is a Knave"]);
        let knowledge = Sentence::and([
            Sentence::iff(knight.clone(), Sentence::not(knave.clone())),
            Sentence::iff(knight.clone(), Sentence::and([knave.clone(), knight.clone()])),
        ]);
        assert_eq!(model_check(&knowledge, &knave), Ok(true));
        assert_eq!(model_check(&knowledge, &knight), Ok(false));
    }

    #[test]
    fn test_disjunction() {
        let [p, q] = atoms(["P", "Q"]);
        let knowledge = Sentence::or([p.clone(), q.clone()]);
        assert_eq!(model_check(&knowledge, &p), Ok(false));
        assert_eq!(model_check(&knowledge, &q), Ok(false));
        assert_eq!(model_check(&knowledge, &knowledge), Ok(true));

        let counter = find_counter_model(&knowledge, &p).unwrap().unwrap();
        assert_eq!(counter.get(&Symbol::new("P")), Some(false));
        assert_eq!(counter.get(&Symbol::new("Q")), Some(true));
    }

    #[test]
    fn test_unsatisfiable_knowledge_entails_everything() {
        let [x, y] = atoms(["X", "Y"]);
        let knowledge = Sentence::and([x.clone(), Sentence::not(x.clone())]);
        assert_eq!(model_check(&knowledge, &x), Ok(true));
        assert_eq!(model_check(&knowledge, &Sentence::not(x.clone())), Ok(true));
        assert_eq!(model_check(&knowledge, &y), Ok(true));
        let y_and_not_y = Sentence::and([y.clone(), Sentence::not(y)]);
        assert_eq!(model_check(&knowledge, &y_and_not_y), Ok(true));
        assert_eq!(find_counter_model(&knowledge, &x), Ok(None));
    }

    #[test]
    fn test_query_symbols_not_in_knowledge() {
        let [p, q] = atoms(["P", "Q"]);
        assert_eq!(model_check(&p, &q), Ok(false));
        assert_eq!(model_check(&p, &Sentence::or([q.clone(), Sentence::not(q)])), Ok(true));
    }

    #[test]
    fn test_modus_ponens() {
        let [rain, wet] = atoms(["rain", "wet"]);
        let knowledge = Sentence::and([Sentence::implies(rain.clone(), wet.clone()), rain]);
        assert_eq!(model_check(&knowledge, &wet), Ok(true));
    }

    #[test]
    fn test_invalid_sentences_rejected() {
        let p = Sentence::symbol("P");
        let empty = Sentence::and(Vec::<Sentence>::new());
        let err = LogicError::EmptyConnective { connective: "And" };
        assert_eq!(model_check(&empty, &p), Err(err.clone()));
        assert_eq!(model_check(&p, &empty), Err(err.clone()));
        assert_eq!(count_models(&empty), Err(err.clone()));
        assert_eq!(is_satisfiable(&empty), Err(err));
    }

    #[test]
    fn test_entailed_symbols() {
        let [a, b, c] = [Symbol::new("A"), Symbol::new("B"), Symbol::new("C")];
        let knowledge = Sentence::and([
            Sentence::from(&a),
            Sentence::implies(&a, Sentence::not(&b)),
        ]);
        let entailed = entailed_symbols(&knowledge, &[c, b, a.clone()]).unwrap();
        assert_eq!(entailed, vec![a]);
    }

    #[test]
    fn test_consistent_models() {
        let [p, q] = atoms(["P", "Q"]);
        let knowledge = Sentence::iff(p, q);
        let models: Vec<String> = consistent_models(&knowledge)
            .unwrap()
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(models, vec!["{P: false, Q: false}", "{P: true, Q: true}"]);
    }

    #[test]
    fn test_count_models() {
        let [p, q, r] = atoms(["P", "Q", "R"]);
        let knowledge = Sentence::or([p.clone(), q.clone()]);
        assert_eq!(count_models(&knowledge), Ok(BigUint::from(3u32)));

        let mut wider = knowledge.symbols();
        wider.insert(Symbol::new("R"));
        assert_eq!(count_models_over(&knowledge, &wider), Ok(BigUint::from(6u32)));

        let narrow = BTreeSet::from([Symbol::new("P")]);
        assert_eq!(
            count_models_over(&knowledge, &narrow),
            Err(LogicError::UnboundSymbol(Symbol::new("Q")))
        );

        let contradiction = Sentence::and([r.clone(), Sentence::not(r)]);
        assert_eq!(count_models(&contradiction), Ok(BigUint::ZERO));
    }

    #[test]
    fn test_satisfiable_and_valid() {
        let [p, q] = atoms(["P", "Q"]);
        let excluded_middle = Sentence::or([p.clone(), Sentence::not(p.clone())]);
        let contradiction = Sentence::and([p.clone(), Sentence::not(p.clone())]);
        let contingent = Sentence::implies(p, q);

        assert_eq!(is_valid(&excluded_middle), Ok(true));
        assert_eq!(is_satisfiable(&excluded_middle), Ok(true));
        assert_eq!(is_valid(&contradiction), Ok(false));
        assert_eq!(is_satisfiable(&contradiction), Ok(false));
        assert_eq!(is_valid(&contingent), Ok(false));
        assert_eq!(is_satisfiable(&contingent), Ok(true));
    }

    #[test]
    fn test_exhaustive_enumeration() {
        // The knowledge is true in exactly one of the 2^10 models.
        let names: Vec<String> = (0..10).map(|i| format!("x{}", i)).collect();
        let vars: Vec<Sentence> = names.iter().map(Sentence::symbol).collect();
        let mut knowledge = Sentence::and(vars[..9].to_vec());
        knowledge.add(Sentence::not(vars[9].clone())).unwrap();

        assert_eq!(count_models(&knowledge), Ok(BigUint::from(1u32)));
        assert_eq!(model_check(&knowledge, &Sentence::not(vars[9].clone())), Ok(true));
        assert_eq!(model_check(&knowledge, &vars[9]), Ok(false));
        for var in &vars[..9] {
            assert_eq!(model_check(&knowledge, var), Ok(true));
        }
    }
}
