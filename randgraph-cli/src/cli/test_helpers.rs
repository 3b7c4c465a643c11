//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::super::{Cli, CliError, Command, GenerateCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// A seeded, unweighted `generate` command writing to stdout.
pub(super) fn generate_command(nodes: usize, edges: usize) -> GenerateCommand {
    GenerateCommand {
        nodes,
        edges,
        weighted: false,
        min_weight: None,
        max_weight: None,
        seed: Some(7),
        max_attempts: 10_000,
        output: None,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn generate_expecting_error(command: GenerateCommand, panic_msg: &str) -> CliError {
    run_cli_expecting_error(
        Cli {
            command: Command::Generate(command),
        },
        panic_msg,
    )
}
