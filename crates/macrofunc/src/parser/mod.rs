//! Grammars for the values and parameters that macro functions interpret.
//!
//! Each grammar must match its whole input: a successful parse of a prefix
//! followed by leftover characters is an error.

mod datetime;
mod error;
mod number;
mod relative_time;

pub use datetime::{TimeValue, UtcOffsetSpec, parse_time_value};
pub use error::ParseError;
pub use number::{NumberOptions, parse_number};
pub use relative_time::{RelativeTime, RelativeToken, TimeUnit, parse_relative_time};

pub(crate) use relative_time::localize;

use winnow::prelude::*;

/// Run `parser` against all of `input`.
fn parse_complete<'i, O>(
    input: &'i str,
    mut parser: impl FnMut(&mut &'i str) -> ModalResult<O>,
) -> Result<O, ParseError> {
    let mut remaining = input;
    match parser(&mut remaining) {
        Ok(output) => match remaining.chars().next() {
            None => Ok(output),
            Some(found) => Err(ParseError::Trailing {
                column: column_of(input, remaining),
                found,
            }),
        },
        Err(e) => Err(ParseError::Syntax {
            column: column_of(input, remaining),
            message: format!("parse error: {e}"),
        }),
    }
}

/// One-based character column of `remaining` within `original`.
fn column_of(original: &str, remaining: &str) -> usize {
    let consumed = original.len() - remaining.len();
    original[..consumed].chars().count() + 1
}
