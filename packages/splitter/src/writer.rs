//! Output file writer for test command files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::output_file_name;
use crate::error::{Result, SplitterError};

/// Create the output directory if it does not exist yet.
///
/// An existing directory is left untouched, including any files in it.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| SplitterError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Render commands as file content: one per line, trailing newline.
///
/// # Examples
/// ```
/// use suite_splitter::writer::render_commands;
///
/// let commands = vec!["run bar".to_string(), "run baz".to_string()];
/// assert_eq!(render_commands(&commands), "run bar\nrun baz\n");
/// ```
pub fn render_commands(commands: &[String]) -> String {
    format!("{}\n", commands.join("\n"))
}

/// Write the commands of one test into `dir`, replacing any existing file.
///
/// Uses atomic write pattern: writes to a hidden temp file, syncs to disk,
/// then renames over the destination. On failure the temp file is removed,
/// so no stray entry is left in `dir`.
///
/// # Arguments
/// * `dir` - Output directory (must exist)
/// * `id` - Test identifier used in the file name
/// * `commands` - Commands to write, in order
///
/// # Returns
/// Path to the written file
pub fn write_commands(dir: &Path, id: &str, commands: &[String]) -> Result<PathBuf> {
    let file_name = output_file_name(id);
    let output_file = dir.join(&file_name);
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    let content = render_commands(commands);

    if let Err(source) = replace_file(&temp_file, &output_file, content.as_bytes()) {
        // Best effort: the write error is what gets reported
        let _ = fs::remove_file(&temp_file);
        return Err(SplitterError::Write {
            path: output_file,
            source,
        });
    }

    tracing::info!(path = %output_file.display(), commands = commands.len(), "wrote test file");

    Ok(output_file)
}

/// Write `content` to `temp_file`, sync it, and rename it to `output_file`.
fn replace_file(temp_file: &Path, output_file: &Path, content: &[u8]) -> std::io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(temp_file, output_file)
}

/// Count the entries of a directory, files and subdirectories alike.
pub fn count_entries(dir: &Path) -> Result<usize> {
    let list_error = |source: std::io::Error| SplitterError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut count = 0;
    for entry in fs::read_dir(dir).map_err(list_error)? {
        entry.map_err(list_error)?;
        count += 1;
    }
    Ok(count)
}
