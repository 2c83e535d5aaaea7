use std::fmt::Display;

use crate::evaluation_error::EvaluationError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Returns the operator whose symbol is exactly `token`, if any.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Applies the operator to `left_side` (the value pushed first) and
    /// `right_side` (the value pushed last).
    ///
    /// Division truncates toward zero, so `-7 / 2` is `-3`. All arithmetic
    /// is checked; results outside the `i64` range are reported as
    /// `IntegerOverflow` rather than wrapping.
    pub fn apply(&self, left_side: i64, right_side: i64) -> Result<i64, EvaluationError> {
        let result = match self {
            Operator::Add => left_side.checked_add(right_side),
            Operator::Subtract => left_side.checked_sub(right_side),
            Operator::Multiply => left_side.checked_mul(right_side),
            Operator::Divide => {
                if right_side == 0 {
                    return Err(EvaluationError::DivisionByZero { index: None });
                }
                left_side.checked_div(right_side)
            }
        };
        result.ok_or(EvaluationError::IntegerOverflow {
            operator: *self,
            index: None,
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies the operator named by the symbol `op`.
pub fn apply(op: &str, left_side: i64, right_side: i64) -> Result<i64, EvaluationError> {
    let Some(operator) = Operator::from_token(op) else {
        return Err(EvaluationError::UnknownOperator(op.to_string()));
    };
    operator.apply(left_side, right_side)
}
