//! Conversions between readout text and `f64`, plus the four operations.
//!
//! Formatting is Rust's shortest round-trip `Display` for `f64` and is not
//! rounded: `0.1 + 0.2` reads `0.30000000000000004`. Zero is always written
//! as `0`, never `-0`.

use super::error::CalcError;
use super::event::Operator;
use tracing::warn;

/// Parse readout text. Readouts are built from keypad input and formatted
/// results, so this only falls back to NaN for text the engine never
/// produces. NaN never compares equal to zero, so a bad readout cannot pass
/// for a zero divisor.
pub fn parse(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            warn!(text, error = %e, "unparseable readout, treating as NaN");
            f64::NAN
        }
    }
}

/// Whether more digits or a decimal point may be typed onto `text`. Results
/// that overflowed (`inf`, `-inf`, `NaN`) are closed to further entry.
pub fn accepts_entry(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn format(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn evaluate(lhs: f64, op: Operator, rhs: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Divide => Ok(lhs / rhs),
    }
}
