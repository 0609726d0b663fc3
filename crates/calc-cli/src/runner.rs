//! Single-shot evaluation of one expression

use std::io::Write;

use calc_eval::calculate;

use crate::error::Result;
use crate::format::format_value;

/// Evaluate `expression` once and write the result to `out`.
///
/// Evaluation errors are returned as [`crate::CliError::Eval`] so the caller
/// can report them as a usage error.
pub fn run_once<W: Write>(expression: &str, mut out: W) -> Result<()> {
    tracing::debug!(expression, "evaluating argument");
    let value = calculate(expression)?;
    writeln!(out, "{}", format_value(value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use calc_eval::ErrorKind;

    #[test]
    fn test_prints_result() {
        let mut out = Vec::new();
        run_once("6 * 7", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "42\n");
    }

    #[test]
    fn test_prints_fraction() {
        let mut out = Vec::new();
        run_once("1 / 4", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.25\n");
    }

    #[test]
    fn test_prints_huge_result_in_exponent_form() {
        let mut out = Vec::new();
        run_once("1e300 * 1", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1e300\n");
    }

    #[test]
    fn test_error_writes_nothing() {
        let mut out = Vec::new();
        let err = run_once("8 / 0", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Eval(ref e) if e.kind() == ErrorKind::DivisionByZero));
        assert_eq!(err.to_string(), "Division by zero is not allowed.");
        assert!(out.is_empty());
    }
}
