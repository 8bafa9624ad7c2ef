//! Parse error type for the helper grammars.

use thiserror::Error;

/// An error that occurred while parsing a helper grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not match the grammar at the given column.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// The grammar matched a prefix of the input but characters remain.
    #[error("unexpected character '{found}' at column {column}")]
    Trailing { column: usize, found: char },
}
