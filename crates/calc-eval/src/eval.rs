//! Expression evaluation entry point.

use crate::expression::Expression;

/// Evaluate a two-operand expression such as `"2 + 3"`.
///
/// Leading, trailing, and repeated whitespace is ignored. Fails with
/// [`crate::Error::Format`] unless the input is exactly three tokens,
/// [`crate::Error::UnsupportedOperator`] if the middle token is not one of
/// `+ - * /`, [`crate::Error::Operand`] if an operand is not a number, and
/// [`crate::Error::DivisionByZero`] when dividing by zero.
///
/// ```
/// use calc_eval::{calculate, ErrorKind};
///
/// assert_eq!(calculate("6 * 7").unwrap(), 42.0);
/// assert_eq!(calculate("8 / 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub fn calculate(expression: &str) -> crate::Result<f64> {
    Expression::parse(expression)?.evaluate()
}
