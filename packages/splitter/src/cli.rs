//! Command-line interface for the splitter.

use std::path::Path;

use clap::Parser;
use console::style;

use crate::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use crate::error::Result;
use crate::splitter::split_suite_with;

/// Split `test_suite.txt` into one command file per test under `tests/`.
#[derive(Parser)]
#[command(name = "split-tests")]
#[command(version, about, long_about = None)]
pub struct Cli {}

/// Run the CLI.
pub fn run() -> Result<()> {
    let _cli = Cli::parse();

    split_command(Path::new(DEFAULT_INPUT_FILE), Path::new(DEFAULT_OUTPUT_DIR))
}

/// Execute the split and print one line per written file plus a summary.
fn split_command(input: &Path, output_dir: &Path) -> Result<()> {
    let report = split_suite_with(input, output_dir, |path| {
        println!("{} {}", style("Created").green(), path.display());
    })?;

    // The summary counts everything in the output directory, not only the
    // files written by this run.
    println!();
    println!(
        "{} Created {} test files",
        style("Done!").green().bold(),
        report.directory_entries
    );

    Ok(())
}
