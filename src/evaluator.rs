use log::debug;

use crate::{evaluation_error::EvaluationError, operators::Operator, tokenizer::tokenize};

/// The operand stack for a single evaluation.
#[derive(Debug, Default)]
pub struct EvaluationStack {
    values: Vec<i64>,
}

impl EvaluationStack {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pops the two topmost values, returning them as `(left, right)`, where
    /// `right` is the most recently pushed one. Nothing is popped if fewer
    /// than two values are available.
    pub fn pop_operands(
        &mut self,
        operator: Operator,
        index: usize,
    ) -> Result<(i64, i64), EvaluationError> {
        if self.values.len() < 2 {
            return Err(EvaluationError::InsufficientOperands { operator, index });
        }
        let right_side = self.values.pop();
        let left_side = self.values.pop();
        match (left_side, right_side) {
            (Some(l), Some(r)) => Ok((l, r)),
            _ => Err(EvaluationError::InsufficientOperands { operator, index }),
        }
    }

    /// Consumes the stack, returning its only value.
    pub fn into_result(self) -> Result<i64, EvaluationError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(EvaluationError::MalformedExpression {
                stack_size: values.len(),
            }),
        }
    }
}

/// Parses an integer literal: an optional leading `-` followed by one or
/// more ASCII digits.
///
/// This is stricter than `i64::from_str`, which also accepts a leading `+`.
pub fn parse_integer(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

/// Evaluates a sequence of RPN tokens.
pub fn evaluate<T: AsRef<str>>(tokens: &[T]) -> Result<i64, EvaluationError> {
    let mut stack = EvaluationStack::default();

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if let Some(operator) = Operator::from_token(token) {
            let (left_side, right_side) = stack.pop_operands(operator, index)?;
            let value = operator
                .apply(left_side, right_side)
                .map_err(|err| err.at_index(index))?;
            debug!("{} {} {} = {}", left_side, operator, right_side, value);
            stack.push(value);
        } else if let Some(value) = parse_integer(token) {
            debug!("push {}", value);
            stack.push(value);
        } else {
            return Err(EvaluationError::InvalidToken {
                token: token.to_string(),
                index,
            });
        }
    }

    let result = stack.into_result()?;
    debug!("result {}", result);
    Ok(result)
}

/// Tokenizes and evaluates an RPN expression.
pub fn evaluate_expression(expression: &str) -> Result<i64, EvaluationError> {
    evaluate(&tokenize(expression))
}
