//! Model file parse errors.

use super::error_code::{self, ImmunetErrorCode};

/// Errors raised while reading the line-oriented model format.
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid input on line {line}: unknown directive `{token}`")]
    UnknownDirective { line: usize, token: String },

    #[error("Line {line}: {directive} is missing its {field} field")]
    MissingField {
        line: usize,
        directive: &'static str,
        field: &'static str,
    },

    #[error("Line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl ImmunetErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
