use std::{error::Error, fmt::Display};

use colored::*;
use log::debug;
use rpncalc::{evaluate_expression, EvaluationError, Tokenizer};

use crate::{
    cli_args::Config,
    input::{read_expression, InputError},
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_EVALUATION_ERROR: i32 = 2;
pub const EXIT_USAGE_ERROR: i32 = 3;

#[derive(Debug)]
pub enum RunError {
    Input(InputError),
    Evaluation {
        error: EvaluationError,
        expression: String,
    },
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Input(_) => EXIT_INPUT_ERROR,
            RunError::Evaluation { .. } => EXIT_EVALUATION_ERROR,
        }
    }
}

impl From<InputError> for RunError {
    fn from(value: InputError) -> Self {
        RunError::Input(value)
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::Input(err) => Some(err),
            RunError::Evaluation { error, .. } => Some(error),
        }
    }
}

impl Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Input(err) => write!(f, "Error: {}", err),
            RunError::Evaluation { error, .. } => write!(f, "Calculation error: {}", error),
        }
    }
}

/// Returns the expression followed by a line of carets pointing at the
/// token that caused the given error, or nothing if the error isn't
/// about a particular token.
pub fn get_line_with_pointer_caret(expression: &str, error: &EvaluationError) -> Vec<String> {
    let Some(range) = error
        .token_index()
        .and_then(|index| Tokenizer::token_range(expression, index))
    else {
        return vec![];
    };
    let padding = expression[..range.start].chars().count();
    let width = expression[range].chars().count();
    vec![
        expression.to_owned(),
        format!("{}{}", " ".repeat(padding), "^".repeat(width)),
    ]
}

pub struct StdioCalculator {
    config: Config,
}

impl StdioCalculator {
    pub fn new(config: Config) -> Self {
        StdioCalculator { config }
    }

    fn calculate(&self) -> Result<i64, RunError> {
        let path = &self.config.input_path;
        let display_path = std::path::absolute(path).unwrap_or_else(|_| path.clone());

        println!("--- RPN calculator ---");
        println!("Input file: {}", display_path.display());

        let expression = read_expression(path)?;
        println!("Expression: {}", expression);

        evaluate_expression(&expression).map_err(|error| RunError::Evaluation { error, expression })
    }

    fn show_error(&self, err: &RunError) {
        eprintln!("{}", err.to_string().red());
        if let RunError::Evaluation { error, expression } = err {
            for line in get_line_with_pointer_caret(expression, error) {
                eprintln!("{}", format!("| {line}").dimmed());
            }
        }
    }

    pub fn run(&self) -> i32 {
        debug!("running with {:?}", self.config);
        match self.calculate() {
            Ok(result) => {
                println!("Result: {}", result);
                EXIT_SUCCESS
            }
            Err(err) => {
                self.show_error(&err);
                err.exit_code()
            }
        }
    }
}
