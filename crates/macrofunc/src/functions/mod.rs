//! Handlers for the individual macro functions.
//!
//! Every handler is a pure function of the macro value and the parameter
//! list. A handler returns the transformed value or the reason the call is
//! unresolved; it never panics on user input.

mod encoding;
mod expand;
mod number;
mod pattern;
mod time;
mod transliterate;

pub use encoding::{btoa, htmldecode, htmlencode, lowercase, uppercase, urldecode, urlencode};
pub use expand::expand_parameter;
pub use number::fmtnum;
pub use pattern::{regrepl, regsub};
pub use time::fmttime;
pub use transliterate::tr;

use crate::error::EvalError;
use crate::function::MacroFunction;

fn parameter_count(
    function: MacroFunction,
    expected: &'static str,
    parameters: &[String],
) -> EvalError {
    EvalError::ParameterCount {
        function,
        expected,
        got: parameters.len(),
    }
}

/// Check that a function which takes no parameters got none.
///
/// A single empty parameter is what `{MACRO.fn()}` produces, so it counts as
/// no parameters.
fn expect_no_parameters(function: MacroFunction, parameters: &[String]) -> Result<(), EvalError> {
    match parameters {
        [] => Ok(()),
        [only] if only.is_empty() => Ok(()),
        _ => Err(parameter_count(function, "0", parameters)),
    }
}

/// Convert bytes to a string, replacing each ill-formed UTF-8 sequence
/// with `?`.
fn normalize_utf8(bytes: &[u8]) -> String {
    let mut normalized = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        normalized.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            normalized.push('?');
        }
    }
    normalized
}
