//! Tokenizing input into an operand/operator/operand triple.

use crate::error::Error;
use crate::operator::Operator;

/// A tokenized expression, borrowed from the input text.
///
/// Nothing is validated beyond the token count; operator lookup and operand
/// parsing happen in [`Expression::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    pub left: &'a str,
    pub operator: &'a str,
    pub right: &'a str,
}

impl<'a> Expression<'a> {
    /// Split `input` on whitespace into exactly three tokens.
    pub fn parse(input: &'a str) -> crate::Result<Self> {
        let mut tokens = input.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(left), Some(operator), Some(right), None) => Ok(Self {
                left,
                operator,
                right,
            }),
            _ => Err(Error::Format),
        }
    }

    /// Evaluate the expression.
    ///
    /// The operator is resolved before the operands are parsed, so an input
    /// with both a bad operator and bad operands reports the operator.
    pub fn evaluate(&self) -> crate::Result<f64> {
        let operator: Operator = self.operator.parse()?;
        let left = parse_operand(self.left)?;
        let right = parse_operand(self.right)?;

        if operator == Operator::Divide && right == 0.0 {
            return Err(Error::DivisionByZero);
        }

        Ok(operator.apply(left, right))
    }
}

fn parse_operand(token: &str) -> crate::Result<f64> {
    token.parse::<f64>().map_err(|_| Error::operand(token))
}
