//! Dispatch of macro function calls to their handlers.
//!
//! The evaluator is the single place where a failed call turns into the
//! [`UNRESOLVED`] marker. Handlers report failures as [`EvalError`] values.

use bon::Builder;
use chrono::{DateTime, FixedOffset, Local, Utc};
use tracing::{debug, trace};

use crate::error::{EvalError, UNRESOLVED};
use crate::function::{MacroFunction, MacroFunctionCall, compute_suggestions};
use crate::functions;

/// Evaluates macro function calls against resolved macro values.
///
/// An evaluator holds no per-call state and can be shared freely. Its
/// settings only affect `fmttime`.
///
/// # Example
///
/// ```
/// use macrofunc::{Evaluator, MacroFunctionCall};
///
/// let evaluator = Evaluator::new();
/// let call = MacroFunctionCall::new("fmtnum", ["2"]);
/// assert_eq!(evaluator.evaluate("3.14159", &call), "3.14");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Evaluator {
    /// Time zone for interpreting and rendering times. Defaults to the
    /// system local time zone.
    timezone: Option<FixedOffset>,

    /// Fixed "current time" for values that carry only a time of day.
    /// Defaults to the system clock at each call.
    now: Option<DateTime<Utc>>,
}

impl Evaluator {
    /// Create an evaluator using the local time zone and the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `call` against `value`, returning [`UNRESOLVED`] on any
    /// failure.
    pub fn evaluate(&self, value: &str, call: &MacroFunctionCall) -> String {
        match self.try_evaluate(value, call) {
            Ok(result) => result,
            Err(error) => {
                debug!(function = %call.function_name, %error, "macro function unresolved");
                UNRESOLVED.to_string()
            }
        }
    }

    /// Evaluate `call` against `value`, reporting why it failed.
    pub fn try_evaluate(&self, value: &str, call: &MacroFunctionCall) -> Result<String, EvalError> {
        let Some(function) = MacroFunction::from_name(&call.function_name) else {
            return Err(EvalError::UnknownFunction {
                name: call.function_name.clone(),
                suggestions: compute_suggestions(&call.function_name),
            });
        };
        trace!(%function, parameters = call.parameters.len(), "dispatching macro function");
        self.apply(function, value, &call.parameters)
    }

    /// Run the handler for `function`.
    pub fn apply(
        &self,
        function: MacroFunction,
        value: &str,
        parameters: &[String],
    ) -> Result<String, EvalError> {
        match function {
            MacroFunction::Regsub => functions::regsub(value, parameters, false),
            MacroFunction::Iregsub => functions::regsub(value, parameters, true),
            MacroFunction::Fmtnum => functions::fmtnum(value, parameters),
            MacroFunction::Fmttime => {
                let now = self.now.unwrap_or_else(Utc::now);
                match &self.timezone {
                    Some(offset) => functions::fmttime(value, parameters, offset, now),
                    None => functions::fmttime(value, parameters, &Local, now),
                }
            }
            MacroFunction::Regrepl => functions::regrepl(value, parameters),
            MacroFunction::Tr => functions::tr(value, parameters),
            MacroFunction::Btoa => functions::btoa(value, parameters),
            MacroFunction::Urlencode => functions::urlencode(value, parameters),
            MacroFunction::Htmlencode => functions::htmlencode(value, parameters),
            MacroFunction::Urldecode => functions::urldecode(value, parameters),
            MacroFunction::Htmldecode => functions::htmldecode(value, parameters),
            MacroFunction::Lowercase => functions::lowercase(value, parameters),
            MacroFunction::Uppercase => functions::uppercase(value, parameters),
        }
    }
}

/// Evaluate a macro function with a default [`Evaluator`].
///
/// Returns the transformed value, or [`UNRESOLVED`] if the function name is
/// unknown or the call fails.
///
/// ```
/// use macrofunc::{UNRESOLVED, evaluate};
///
/// assert_eq!(evaluate("hello", "tr", &["a-y", "b-z"]), "ifmmp");
/// assert_eq!(evaluate("x", "nosuch", &[""; 0]), UNRESOLVED);
/// ```
pub fn evaluate<S: AsRef<str>>(value: &str, function_name: &str, parameters: &[S]) -> String {
    let call = MacroFunctionCall::new(
        function_name,
        parameters.iter().map(|p| p.as_ref().to_string()),
    );
    Evaluator::new().evaluate(value, &call)
}
