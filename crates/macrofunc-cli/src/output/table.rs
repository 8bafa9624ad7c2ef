//! Table formatting utilities for CLI output.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use macrofunc::MacroFunction;

/// One evaluated call of a batch.
pub struct BatchRow {
    /// The macro value the function was applied to.
    pub value: String,
    /// Function name as written in the batch file.
    pub function: String,
    /// Evaluation result, or the unresolved marker.
    pub result: String,
    pub resolved: bool,
}

/// Format the supported functions as an ASCII table.
pub fn format_function_table(functions: &[MacroFunction]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Function", "Parameters", "Description"]);

    for function in functions {
        table.add_row(vec![function.name(), function.parameters(), function.summary()]);
    }

    table
}

/// Format batch results as an ASCII table, highlighting unresolved calls.
pub fn format_batch_table(rows: &[BatchRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Function", "Result"]);

    for row in rows {
        let result = if row.resolved {
            Cell::new(&row.result)
        } else {
            Cell::new(&row.result).fg(Color::Red)
        };
        table.add_row(vec![Cell::new(&row.value), Cell::new(&row.function), result]);
    }

    table
}
