//! # Check Subcommand
//!
//! Validate a single component given on the command line.
//!
//! `QUANTITY` is read as an integer if it parses as one, else as a float,
//! else it is kept as text, so `fieldrule check WIDGET metal V` reaches the
//! numeric type check instead of failing in the argument parser.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use fieldrule_core::{ComponentInput, Value};

use crate::output::{Outcome, OutputFormat};

/// Arguments for the `fieldrule check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Component name (3 to 10 upper-case characters).
    pub name: String,

    /// Component kind: wood, metal or plastic.
    pub kind: String,

    /// Quantity between 3 and 25.
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,
}

impl CheckArgs {
    /// The unvalidated component these arguments describe.
    pub fn to_input(&self) -> ComponentInput {
        ComponentInput {
            name: self.name.clone(),
            kind: self.kind.clone(),
            quantity: Value::parse_lenient(&self.quantity),
        }
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if the component was accepted, 1 if it was rejected.
pub fn run_check(args: &CheckArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let outcome = Outcome::evaluate(args.to_input());
    tracing::info!(
        name = %args.name,
        kind = %args.kind,
        quantity = %args.quantity,
        accepted = outcome.is_accepted(),
        "checked component"
    );
    outcome.write_to(out, format)?;
    Ok(if outcome.is_accepted() { 0 } else { 1 })
}
