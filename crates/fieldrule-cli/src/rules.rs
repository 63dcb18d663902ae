//! # Rules Subcommand
//!
//! Print the rule table every `Component` is validated against.

use std::io::Write;

use anyhow::Result;

use fieldrule_core::{Component, Record};

use crate::output::OutputFormat;

/// Execute the rules subcommand. Always returns exit code 0.
pub fn run_rules(format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let fields = Component::describe();
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&fields)?)?,
        OutputFormat::Text => {
            writeln!(out, "Component fields:")?;
            for field in &fields {
                writeln!(
                    out,
                    "  {:<10} {:<11} {:<11} {}",
                    field.name, field.storage_key, field.rule, field.description
                )?;
            }
        }
    }
    Ok(0)
}
