//! Miette diagnostic wrapper for malformed batch files.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for batch files that are not valid call lists.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid batch file: {message}")]
#[diagnostic(
    code(macrofunc::batch),
    help("expected an array of {{\"value\", \"function\", \"parameters\"}} objects")
)]
pub struct BatchDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl BatchDiagnostic {
    /// Create a diagnostic from a JSON error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();

        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        BatchDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
        }
    }
}
