//! Implementation of the `macrofunc eval` command.

use macrofunc::{Evaluator, MacroFunctionCall, UNRESOLVED};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Resolved macro value to transform
    #[arg(long, required = true, allow_hyphen_values = true)]
    pub value: String,

    /// Macro function name (e.g., regsub, fmtnum)
    #[arg(short, long, required = true)]
    pub function: String,

    /// Function parameters in order (repeatable)
    #[arg(short = 'p', long = "param", allow_hyphen_values = true)]
    pub params: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult<'a> {
    pub result: &'a str,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, evaluator: &Evaluator) -> miette::Result<i32> {
    let call = MacroFunctionCall::new(args.function, args.params);

    match evaluator.try_evaluate(&args.value, &call) {
        Ok(result) => {
            if args.json {
                let output = EvalResult {
                    result: &result,
                    resolved: true,
                    reason: None,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = EvalResult {
                    result: UNRESOLVED,
                    resolved: false,
                    reason: Some(e.to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", UNRESOLVED.if_supports_color(Stream::Stdout, |t| t.red()));
                eprintln!(
                    "{} {}",
                    "unresolved:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                    e
                );
            }
            Ok(exitcode::DATAERR)
        }
    }
}
