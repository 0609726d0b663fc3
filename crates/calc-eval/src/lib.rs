//! Evaluator for simple two-operand arithmetic expressions.
//!
//! An expression is exactly three whitespace-separated tokens: a left operand,
//! an operator from the fixed set `+ - * /`, and a right operand. Evaluation is
//! a pure function of the input text; nothing is read, written, or remembered
//! between calls.

mod error;
mod eval;
mod expression;
mod operator;

pub use error::{Error, ErrorKind};
pub use eval::calculate;
pub use expression::Expression;
pub use operator::Operator;

/// Result type for evaluator operations.
pub type Result<T> = std::result::Result<T, Error>;
