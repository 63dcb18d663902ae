//! # fieldrule-cli — Command-Line Interface
//!
//! Builds `Component` records from command-line arguments or batch files
//! and reports which were accepted and which were rejected, and why.
//!
//! ## Subcommands
//!
//! - `check` — validate one component given as three arguments
//! - `batch` — validate every component in a YAML or JSON file
//! - `rules` — list the component rule table
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers return an exit code: 0 when everything was accepted, 1 when
//!   anything was rejected. Operational failures (unreadable file, bad
//!   YAML) are `anyhow` errors.
//! - Validation logic lives in `fieldrule-core`; nothing is re-checked here.

pub mod batch;
pub mod check;
pub mod output;
pub mod rules;

pub use output::OutputFormat;
