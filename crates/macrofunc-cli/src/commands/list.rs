//! Implementation of the `macrofunc list` command.

use macrofunc::MacroFunction;
use miette::IntoDiagnostic;
use serde::Serialize;

use crate::output::table::format_function_table;

/// Arguments for the list command.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one function.
#[derive(Debug, Serialize)]
struct FunctionJson {
    name: &'static str,
    parameters: &'static str,
    summary: &'static str,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> miette::Result<i32> {
    if args.json {
        let functions: Vec<FunctionJson> = MacroFunction::ALL
            .iter()
            .map(|f| FunctionJson {
                name: f.name(),
                parameters: f.parameters(),
                summary: f.summary(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&functions).into_diagnostic()?);
    } else {
        println!("{}", format_function_table(&MacroFunction::ALL));
    }
    Ok(exitcode::OK)
}
