//! Numeric grammar shared by the number-formatting function.
//!
//! Integers are `-?\d+`. With floats enabled the grammar widens to
//! `-?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?`. A leading `+` or surrounding
//! whitespace is never accepted.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::one_of;

use super::ParseError;
use super::parse_complete;

/// Options controlling which numbers [`parse_number`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOptions {
    /// Accept fractional parts and exponents.
    pub with_float: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self { with_float: true }
    }
}

/// Check that all of `input` is a number under `options`.
pub fn parse_number(input: &str, options: NumberOptions) -> Result<(), ParseError> {
    if options.with_float {
        parse_complete(input, float)
    } else {
        parse_complete(input, integer)
    }
}

fn integer(input: &mut &str) -> ModalResult<()> {
    (opt('-'), digit1).void().parse_next(input)
}

fn float(input: &mut &str) -> ModalResult<()> {
    (opt('-'), mantissa, opt(exponent)).void().parse_next(input)
}

fn mantissa(input: &mut &str) -> ModalResult<()> {
    alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())).parse_next(input)
}

fn exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTEGER: NumberOptions = NumberOptions { with_float: false };
    const FLOAT: NumberOptions = NumberOptions { with_float: true };

    #[test]
    fn integers() {
        for ok in ["0", "42", "-7", "0012", "99999999999999999999999"] {
            assert!(parse_number(ok, INTEGER).is_ok(), "{ok}");
        }
        for bad in ["", "-", "+1", "1.0", "1e3", " 1", "1 ", "abc"] {
            assert!(parse_number(bad, INTEGER).is_err(), "{bad}");
        }
    }

    #[test]
    fn floats() {
        for ok in ["1", "1.", "1.5", ".5", "-.5", "-2.25", "1e3", "1.5E-3", "2e+10"] {
            assert!(parse_number(ok, FLOAT).is_ok(), "{ok}");
        }
        for bad in ["", ".", "-", "1e", "e3", "1.2.3", "1,5", "+1.5", "1.5 ", "0x10"] {
            assert!(parse_number(bad, FLOAT).is_err(), "{bad}");
        }
    }

    #[test]
    fn trailing_input_reports_column() {
        let err = parse_number("12a", INTEGER).unwrap_err();
        assert_eq!(
            err,
            ParseError::Trailing {
                column: 3,
                found: 'a'
            }
        );
    }
}
