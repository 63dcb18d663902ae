//! # Output Formatting
//!
//! Per-record outcomes rendered as text lines or JSON objects.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use fieldrule_core::{Component, ComponentInput, ValidationError};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per record.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// The result of building one component.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Every field passed its rule.
    Accepted {
        /// The constructed record.
        component: Component,
    },
    /// A field was rejected; no record was built.
    Rejected {
        /// The input as given.
        input: ComponentInput,
        /// Structured error.
        error: ValidationError,
        /// Rendered error message.
        message: String,
    },
}

impl Outcome {
    /// Build a component from `input` and capture the outcome.
    pub fn evaluate(input: ComponentInput) -> Self {
        match Component::try_from(input.clone()) {
            Ok(component) => Self::Accepted { component },
            Err(error) => Self::Rejected {
                input,
                message: error.to_string(),
                error,
            },
        }
    }

    /// Whether the component was built.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Write this outcome in the requested format, followed by a newline.
    pub fn write_to(&self, out: &mut dyn Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(self)?)?,
            OutputFormat::Text => match self {
                Self::Accepted { component } => writeln!(out, "  OK: {component}")?,
                Self::Rejected { error, message, .. } => {
                    writeln!(out, "  FAIL: [{}] {message}", error.kind())?
                }
            },
        }
        Ok(())
    }
}
