//! Command-line interface for generating and inspecting random graphs.
//!
//! `generate` produces a connected simple graph as a whitespace-separated
//! edge list; `inspect` reads such a list back and reports its shape.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, GenerateCommand, GenerateSummary, InspectCommand,
    InspectSummary, render_output, run_cli,
};

#[cfg(test)]
mod tests;
