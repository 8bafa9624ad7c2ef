//! Macro function evaluation.
//!
//! A macro function transforms an already resolved macro value, such as
//! `{ITEM.VALUE}.regsub("(\d+)", \1)`. Every call either produces a string or
//! the [`UNRESOLVED`] marker.

mod error;
mod evaluator;
mod function;
pub mod functions;
pub mod parser;

pub use error::{EvalError, UNRESOLVED, is_unresolved};
pub use evaluator::{Evaluator, evaluate};
pub use function::{MacroFunction, MacroFunctionCall, compute_suggestions};
