//! Error types for expression evaluation.

use thiserror::Error;

/// Result type used by the evaluator and the rewrite passes.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised while evaluating an expression.
///
/// Rewrite passes never produce errors of their own; any error seen by a
/// caller of `rewrite` came from evaluating a captured function argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A division operator was applied with a zero right operand.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Too few operands for an operator, empty input, or operands left over
    /// once every operator has been applied.
    #[error("Malformed expression: {0}")]
    MalformedExpression(&'static str),

    /// A token that is neither a number nor an operator character.
    /// Only raised under [`TokenPolicy::Reject`](super::TokenPolicy::Reject).
    #[error("Unrecognized token '{0}'")]
    UnrecognizedToken(String),

    /// A `)` without a matching `(`, or a `(` never closed.
    /// Only raised in [`ParenMode::Grouping`](super::ParenMode::Grouping).
    #[error("Unbalanced parenthesis")]
    UnbalancedParenthesis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(
            CalcError::MalformedExpression("empty expression").to_string(),
            "Malformed expression: empty expression"
        );
        assert_eq!(
            CalcError::UnrecognizedToken("sin(0".into()).to_string(),
            "Unrecognized token 'sin(0'"
        );
    }
}
