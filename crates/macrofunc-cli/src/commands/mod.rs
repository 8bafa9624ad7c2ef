//! CLI command implementations.

mod batch;
mod eval;
mod list;

pub use batch::{run_batch, BatchArgs};
pub use eval::{run_eval, EvalArgs};
pub use list::{run_list, ListArgs};
