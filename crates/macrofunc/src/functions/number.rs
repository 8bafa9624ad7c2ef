//! Number formatting (`fmtnum`).

use super::parameter_count;
use crate::error::EvalError;
use crate::function::MacroFunction;
use crate::parser::{NumberOptions, parse_number};

/// Largest supported count of fraction digits.
const MAX_DIGITS: u8 = 20;

/// Format a floating point value with a fixed number of fraction digits.
///
/// Integer values are returned unchanged, whatever the digit count.
pub fn fmtnum(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    let [digits] = parameters else {
        return Err(parameter_count(MacroFunction::Fmtnum, "1", parameters));
    };
    if digits.is_empty() {
        return Err(invalid_digits(digits));
    }

    if parse_number(value, NumberOptions { with_float: false }).is_ok() {
        return Ok(value.to_string());
    }

    let invalid_value = || EvalError::InvalidValue {
        function: MacroFunction::Fmtnum,
        value: value.to_string(),
    };
    parse_number(value, NumberOptions::default()).map_err(|_| invalid_value())?;
    let number: f64 = value.parse().map_err(|_| invalid_value())?;

    let digits = Some(digits.as_str())
        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|d| d.parse::<u8>().ok())
        .filter(|d| *d <= MAX_DIGITS)
        .ok_or_else(|| invalid_digits(digits))?;

    Ok(format_fixed(number, digits))
}

fn invalid_digits(digits: &str) -> EvalError {
    EvalError::InvalidParameter {
        function: MacroFunction::Fmtnum,
        parameter: digits.to_string(),
    }
}

/// Render `number` with exactly `digits` fraction digits, rounding half
/// away from zero.
fn format_fixed(number: f64, digits: u8) -> String {
    let precision = usize::from(digits);
    let scale = 10f64.powi(i32::from(digits));
    let scaled = number * scale;

    // Past 2^52 every representable value is integral at this scale.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return format!("{number:.precision$}");
    }

    let rounded = scaled.round() / scale;
    format!("{rounded:.precision$}")
}
