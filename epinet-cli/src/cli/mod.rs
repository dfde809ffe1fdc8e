//! Command-line interface orchestration for epinet.
//!
//! The CLI offers a `generate` command that builds a seeded network, links it
//! with Poisson-distributed degree targets, and reports the outcome.

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, render_summary, run_cli,
};
