//! Implementation of the `macrofunc batch` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use macrofunc::{Evaluator, MacroFunctionCall, UNRESOLVED};
use miette::{miette, IntoDiagnostic};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::table::{format_batch_table, BatchRow};
use crate::output::BatchDiagnostic;

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSON file holding an array of {"value", "function", "parameters"} objects
    pub file: PathBuf,

    /// Exit with non-zero code if any call is unresolved.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One call read from the batch file.
#[derive(Debug, Deserialize)]
pub struct BatchEntry {
    pub value: String,
    #[serde(flatten)]
    pub call: MacroFunctionCall,
}

/// JSON output format for one evaluated call.
#[derive(Debug, Serialize)]
struct BatchJson {
    value: String,
    function: String,
    result: String,
    resolved: bool,
}

/// Parse the contents of a batch file.
pub fn parse_batch(content: &str) -> Result<Vec<BatchEntry>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Run the batch command.
pub fn run_batch(args: BatchArgs, evaluator: &Evaluator) -> miette::Result<i32> {
    let content = read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read batch file {:?}: {}", args.file, e))?;

    let entries = match parse_batch(&content) {
        Ok(entries) => entries,
        Err(e) => {
            let diagnostic = BatchDiagnostic::from_json_error(&args.file, &content, &e);
            return Err(diagnostic.into());
        }
    };
    debug!(calls = entries.len(), file = %args.file.display(), "evaluating batch");

    let rows: Vec<BatchRow> = entries
        .into_iter()
        .map(|entry| {
            let outcome = evaluator.try_evaluate(&entry.value, &entry.call);
            if let Err(e) = &outcome {
                debug!(function = %entry.call.function_name, error = %e, "call unresolved");
            }
            BatchRow {
                resolved: outcome.is_ok(),
                result: outcome.unwrap_or_else(|_| UNRESOLVED.to_string()),
                value: entry.value,
                function: entry.call.function_name,
            }
        })
        .collect();

    let any_unresolved = rows.iter().any(|row| !row.resolved);

    if args.json {
        let json_data: Vec<BatchJson> = rows
            .into_iter()
            .map(|row| BatchJson {
                value: row.value,
                function: row.function,
                result: row.result,
                resolved: row.resolved,
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_batch_table(&rows);
        println!("{}", table);
    }

    if args.strict && any_unresolved {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
