//! Result formatting

/// Magnitudes at or above this print in exponent form.
const EXP_UPPER: f64 = 1e16;
/// Nonzero magnitudes below this print in exponent form.
const EXP_LOWER: f64 = 1e-4;

/// Render a result for display.
///
/// Plain decimal for everyday magnitudes, shortest exponent form (`1e300`,
/// `2.5e-7`) for very large or very small ones. Both forms round-trip
/// through the evaluator's operand parser.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && (magnitude >= EXP_UPPER || magnitude < EXP_LOWER) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}
