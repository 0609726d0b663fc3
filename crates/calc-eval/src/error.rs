//! Error types for the evaluator.

use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Every variant is a user-input error. The display text is meant to be shown
/// to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input did not split into exactly three tokens.
    #[error("Expression must consist of two operands and one operator separated by spaces.")]
    Format,

    /// The middle token is not one of `+ - * /`.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// An operand token is not a decimal number. Holds the first offending token.
    #[error("Operands must be numbers.")]
    Operand(String),

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

/// Fieldless tag for [`Error`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    UnsupportedOperator,
    Operand,
    DivisionByZero,
}

impl Error {
    pub fn unsupported_operator(symbol: impl Into<String>) -> Self {
        Error::UnsupportedOperator(symbol.into())
    }

    pub fn operand(token: impl Into<String>) -> Self {
        Error::Operand(token.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format => ErrorKind::Format,
            Error::UnsupportedOperator(_) => ErrorKind::UnsupportedOperator,
            Error::Operand(_) => ErrorKind::Operand,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}
