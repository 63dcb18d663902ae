//! # Batch Subcommand
//!
//! Validate every component listed in a YAML or JSON file. The file is a
//! sequence of `{name, kind, quantity}` mappings. Each entry is built
//! independently; one rejection does not stop the rest.
//!
//! The format is chosen by extension: `.json` is JSON, anything else is
//! read as YAML (a superset of JSON).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use fieldrule_core::ComponentInput;

use crate::output::{Outcome, OutputFormat};

/// Arguments for the `fieldrule batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File listing the components to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Summary counts for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Entries read from the file.
    pub total: usize,
    /// Entries that produced a component.
    pub accepted: usize,
}

impl BatchReport {
    /// Entries that were rejected.
    pub fn rejected(&self) -> usize {
        self.total - self.accepted
    }
}

/// Read the component inputs from `path`.
pub fn load_inputs(path: &Path) -> Result<Vec<ComponentInput>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let inputs = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON from {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))?
    };
    Ok(inputs)
}

/// Evaluate every input, writing one outcome per entry.
pub fn evaluate_all(
    inputs: Vec<ComponentInput>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for input in inputs {
        let outcome = Outcome::evaluate(input);
        report.total += 1;
        if outcome.is_accepted() {
            report.accepted += 1;
        }
        outcome.write_to(out, format)?;
    }
    Ok(report)
}

/// Execute the batch subcommand.
///
/// Returns exit code: 0 if every entry was accepted, 1 otherwise.
pub fn run_batch(args: &BatchArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let inputs = load_inputs(&args.path)?;
    tracing::info!(path = %args.path.display(), entries = inputs.len(), "loaded batch");

    let report = evaluate_all(inputs, format, out)?;

    if format == OutputFormat::Text {
        writeln!(out, "Components: {}/{} accepted", report.accepted, report.total)?;
    }
    if report.rejected() > 0 {
        tracing::warn!(rejected = report.rejected(), total = report.total, "batch had rejections");
        Ok(1)
    } else {
        Ok(0)
    }
}
