//! Core data types for the splitter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::output_file_name;
use crate::error::{Result, SplitterError};
use crate::sections::extract_commands;

/// The full text of a source document, read once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the document was read from.
    pub path: PathBuf,

    /// Entire file content.
    pub text: String,
}

impl Document {
    /// Create a document from in-memory text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk in full.
    ///
    /// # Returns
    /// * `Err(SplitterError::NotFound)` if the file does not exist
    /// * `Err(SplitterError::Read)` for any other read failure
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SplitterError::NotFound(path.to_path_buf())
            } else {
                SplitterError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "read source document");

        Ok(Self::new(path, text))
    }
}

/// One labeled block of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Dotted numeric test identifier (e.g., "3.2").
    pub id: String,

    /// 1-based line number of the marker line.
    pub line: usize,

    /// Raw body lines following the marker, marker excluded.
    pub body: Vec<String>,
}

impl Section {
    /// Create an empty section opened by a marker at `line`.
    #[must_use]
    pub fn new(id: impl Into<String>, line: usize) -> Self {
        Self {
            id: id.into(),
            line,
            body: Vec::new(),
        }
    }

    /// Commands of this section, in order.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        extract_commands(&self.body)
    }

    /// Output file name for this section (e.g., "test3.2.txt").
    #[must_use]
    pub fn file_name(&self) -> String {
        output_file_name(&self.id)
    }
}

/// Outcome of one splitter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Files written during this run, in emission order.
    pub written: Vec<PathBuf>,

    /// Identifiers of sections that had no commands.
    pub skipped: Vec<String>,

    /// Number of entries in the output directory after the run.
    ///
    /// Includes files left over from earlier runs.
    pub directory_entries: usize,
}
