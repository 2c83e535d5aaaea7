mod evaluation_error;
mod evaluator;
mod operators;
mod tokenizer;

pub use evaluation_error::EvaluationError;
pub use evaluator::{evaluate, evaluate_expression, parse_integer, EvaluationStack};
pub use operators::{apply, Operator};
pub use tokenizer::{tokenize, RawToken, Tokenizer};
