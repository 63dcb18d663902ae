//! # fieldrule CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fieldrule_cli::batch::{run_batch, BatchArgs};
use fieldrule_cli::check::{run_check, CheckArgs};
use fieldrule_cli::rules::run_rules;
use fieldrule_cli::OutputFormat;

/// fieldrule — validated record construction.
///
/// Builds components whose fields are gated by membership, range, and text
/// rules, and reports every rejected value with the rule it violated.
#[derive(Parser, Debug)]
#[command(name = "fieldrule", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one component: NAME KIND QUANTITY.
    Check(CheckArgs),

    /// Validate every component in a YAML or JSON file.
    Batch(BatchArgs),

    /// List the component rule table.
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(format = ?cli.format, "fieldrule CLI starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, cli.format, &mut out),
        Commands::Batch(args) => run_batch(&args, cli.format, &mut out),
        Commands::Rules => run_rules(cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
