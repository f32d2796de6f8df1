//! Main splitter service that ties all components together.

use std::path::Path;

use crate::error::Result;
use crate::sections::find_sections;
use crate::types::{Document, SplitReport};
use crate::writer::{count_entries, ensure_output_dir, write_commands};

/// Read a suite file and write one command file per test.
///
/// # Arguments
/// * `input` - Path to the combined suite document
/// * `output_dir` - Directory receiving the per-test files (created if missing)
///
/// # Returns
/// A `SplitReport` listing the files written during this run
pub fn split_suite(input: &Path, output_dir: &Path) -> Result<SplitReport> {
    split_suite_with(input, output_dir, |_| {})
}

/// Like [`split_suite`], calling `on_written` right after each file is written.
pub fn split_suite_with(
    input: &Path,
    output_dir: &Path,
    on_written: impl FnMut(&Path),
) -> Result<SplitReport> {
    let document = Document::read(input)?;
    split_document_with(&document, output_dir, on_written)
}

/// Split an already loaded document into `output_dir`.
///
/// Sections are emitted in document order, so when an identifier repeats
/// the later section's file replaces the earlier one.
pub fn split_document(document: &Document, output_dir: &Path) -> Result<SplitReport> {
    split_document_with(document, output_dir, |_| {})
}

/// Like [`split_document`], calling `on_written` right after each file is written.
pub fn split_document_with(
    document: &Document,
    output_dir: &Path,
    mut on_written: impl FnMut(&Path),
) -> Result<SplitReport> {
    ensure_output_dir(output_dir)?;

    let mut report = SplitReport::default();

    for section in find_sections(&document.text) {
        let commands = section.commands();
        tracing::debug!(
            id = %section.id,
            line = section.line,
            commands = commands.len(),
            "found section"
        );

        if commands.is_empty() {
            tracing::warn!(id = %section.id, line = section.line, "section has no commands, skipping");
            report.skipped.push(section.id);
            continue;
        }

        let path = write_commands(output_dir, &section.id, &commands)?;
        on_written(&path);
        report.written.push(path);
    }

    report.directory_entries = count_entries(output_dir)?;

    tracing::info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        directory_entries = report.directory_entries,
        "split complete"
    );

    Ok(report)
}
