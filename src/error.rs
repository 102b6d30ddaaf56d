//! Errors raised while building or evaluating sentences.

use std::fmt::{Display, Formatter};

use crate::symbol::Symbol;

/// Error type for sentence construction and evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LogicError {
    /// A conjunction or disjunction without operands.
    EmptyConnective {
        /// Name of the offending connective (`"And"` or `"Or"`).
        connective: &'static str,
    },
    /// An operand was appended to a sentence that is neither a conjunction nor a disjunction.
    NotExtensible {
        /// Formula of the sentence `add` was called on.
        formula: String,
    },
    /// The model has no value for a symbol referenced by the sentence.
    UnboundSymbol(Symbol),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicError::EmptyConnective { connective } => {
                write!(f, "{} must have at least one operand", connective)
            }
            LogicError::NotExtensible { formula } => {
                write!(f, "cannot add an operand to '{}'", formula)
            }
            LogicError::UnboundSymbol(symbol) => {
                write!(f, "symbol '{}' is not assigned in the model", symbol)
            }
        }
    }
}

impl std::error::Error for LogicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LogicError::EmptyConnective { connective: "And" };
        assert_eq!(err.to_string(), "And must have at least one operand");

        let err = LogicError::UnboundSymbol(Symbol::new("P"));
        assert_eq!(err.to_string(), "symbol 'P' is not assigned in the model");

        let err = LogicError::NotExtensible {
            formula: "¬P".to_string(),
        };
        assert_eq!(err.to_string(), "cannot add an operand to '¬P'");
    }
}
