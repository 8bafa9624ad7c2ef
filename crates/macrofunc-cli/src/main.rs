//! Macrofunc CLI entry point.
//!
//! Provides command-line tools for evaluating macro functions:
//! - `macrofunc eval` - Apply one function to a value
//! - `macrofunc batch` - Evaluate a JSON file of calls
//! - `macrofunc list` - Show the supported functions

mod commands;
mod output;
mod settings;

use std::io::stderr;
use std::process::exit;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_batch, run_eval, run_list, BatchArgs, EvalArgs, ListArgs};
use settings::{parse_now, parse_utc_offset};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Macro function evaluation tools.
#[derive(Debug, Parser)]
#[command(name = "macrofunc")]
#[command(about = "Macro function evaluation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Time zone for fmttime as a UTC offset (e.g., +02:00). Defaults to local time.
    #[arg(long, global = true, env = "MACROFUNC_UTC_OFFSET", value_parser = parse_utc_offset)]
    pub utc_offset: Option<FixedOffset>,

    /// Current time for fmttime as an RFC 3339 timestamp. Defaults to the system clock.
    #[arg(long, global = true, env = "MACROFUNC_NOW", value_parser = parse_now)]
    pub now: Option<DateTime<FixedOffset>>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a macro function to a value
    Eval(EvalArgs),
    /// Evaluate a JSON file of macro function calls
    Batch(BatchArgs),
    /// List the supported macro functions
    List(ListArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "macrofunc=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(stderr))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let evaluator = settings::evaluator(cli.utc_offset, cli.now);

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args, &evaluator),
        Commands::Batch(args) => run_batch(args, &evaluator),
        Commands::List(args) => run_list(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
