use std::{error::Error, fmt::Display};

use crate::operators::Operator;

/// Everything that can go wrong while evaluating an expression.
///
/// Token indices are zero-based positions in the token sequence, not
/// byte offsets into the source string.
#[derive(Debug, PartialEq, Clone)]
pub enum EvaluationError {
    /// The token is neither an operator nor an integer literal.
    InvalidToken { token: String, index: usize },
    /// An operator was reached with fewer than two values on the stack.
    InsufficientOperands { operator: Operator, index: usize },
    /// The right-hand side of a division was zero. The index is absent when
    /// the operator was applied outside of an expression.
    DivisionByZero { index: Option<usize> },
    /// The stack didn't hold exactly one value once every token was consumed.
    MalformedExpression { stack_size: usize },
    UnknownOperator(String),
    /// The result doesn't fit in an `i64`.
    IntegerOverflow {
        operator: Operator,
        index: Option<usize>,
    },
}

impl EvaluationError {
    /// Returns the index of the token responsible for this error, if any.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            EvaluationError::InvalidToken { index, .. } => Some(*index),
            EvaluationError::InsufficientOperands { index, .. } => Some(*index),
            EvaluationError::DivisionByZero { index } => *index,
            EvaluationError::IntegerOverflow { index, .. } => *index,
            EvaluationError::MalformedExpression { .. } => None,
            EvaluationError::UnknownOperator(_) => None,
        }
    }

    /// Attaches the position of the operator token that raised this error.
    pub(crate) fn at_index(self, token_index: usize) -> Self {
        match self {
            EvaluationError::DivisionByZero { .. } => EvaluationError::DivisionByZero {
                index: Some(token_index),
            },
            EvaluationError::IntegerOverflow { operator, .. } => {
                EvaluationError::IntegerOverflow {
                    operator,
                    index: Some(token_index),
                }
            }
            other => other,
        }
    }
}

impl Error for EvaluationError {}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationError::InvalidToken { token, index } => {
                write!(f, "invalid token '{}' at position {}", token, index + 1)
            }
            EvaluationError::InsufficientOperands { operator, index } => {
                write!(
                    f,
                    "not enough operands for '{}' at position {}",
                    operator,
                    index + 1
                )
            }
            EvaluationError::DivisionByZero { .. } => write!(f, "division by zero"),
            EvaluationError::MalformedExpression { stack_size: 0 } => {
                write!(f, "empty expression")
            }
            EvaluationError::MalformedExpression { stack_size } => {
                write!(f, "incomplete expression: {} values left", stack_size)
            }
            EvaluationError::UnknownOperator(op) => write!(f, "unknown operator '{}'", op),
            EvaluationError::IntegerOverflow { operator, .. } => {
                write!(f, "integer overflow in '{}'", operator)
            }
        }
    }
}
