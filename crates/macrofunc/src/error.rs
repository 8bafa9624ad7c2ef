//! Error types for macro function evaluation.

use thiserror::Error;

use crate::function::MacroFunction;

/// The marker string returned when a macro function cannot be evaluated.
///
/// Callers of [`crate::evaluate`] receive this value in place of a result and
/// must compare by equality to detect it.
pub const UNRESOLVED: &str = "*UNKNOWN*";

/// Returns true if `result` is the [`UNRESOLVED`] marker.
pub fn is_unresolved(result: &str) -> bool {
    result == UNRESOLVED
}

/// The reason a macro function call did not resolve.
///
/// Every variant collapses to [`UNRESOLVED`] at the evaluation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Function name is not one of the supported macro functions.
    #[error("unknown macro function '{name}'{}", format_suggestions(suggestions))]
    UnknownFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrong number of parameters for the function.
    #[error("'{function}' expects {expected} parameters, got {got}")]
    ParameterCount {
        function: MacroFunction,
        expected: &'static str,
        got: usize,
    },

    /// Regular expression failed to compile.
    #[error("invalid regular expression '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The macro value is not acceptable input for the function.
    #[error("'{function}' cannot process value '{value}'")]
    InvalidValue {
        function: MacroFunction,
        value: String,
    },

    /// A parameter has the right position but an unusable value.
    #[error("'{function}' rejects parameter '{parameter}'")]
    InvalidParameter {
        function: MacroFunction,
        parameter: String,
    },

    /// A character range in a transliteration list runs backwards.
    #[error("invalid character range '{start}-{end}'")]
    InvalidRange { start: char, end: char },

    /// Relative time offset does not follow the `now[+-]N[unit]` grammar.
    #[error("invalid relative time expression '{expression}'")]
    InvalidRelativeTime { expression: String },

    /// A time computation left the representable range.
    #[error("time value out of range")]
    TimeOutOfRange,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
