//! Suite Splitter - Split a combined test suite into per-test command files.
//!
//! A suite file holds many test cases, each introduced by a marker comment
//! such as `// Test 2.1`. This crate extracts the command lines of every
//! test case and writes them to `tests/test<id>.txt`.
//!
//! # Example
//!
//! ```
//! use suite_splitter::sections::find_sections;
//!
//! let suite = "// Test 1\nrun foo\n// Test 2\nrun bar\nrun baz\n// ====\n";
//! let sections = find_sections(suite);
//!
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[1].commands(), vec!["run bar", "run baz"]);
//! ```
//!
//! # Output
//!
//! The `split-tests` binary prints one `Created <path>` line per file and a
//! closing summary on stdout. Diagnostics from [`tracing`] (duplicate
//! identifiers, sections without commands) are written to stderr, so the
//! stdout lines stay stable for scripts that read them. Set `RUST_LOG` to
//! change the log level; the default is `warn`.
//!
//! # Architecture
//!
//! - [`config`]: Fixed paths, marker patterns and file naming
//! - [`types`]: Core data types (Document, Section, SplitReport)
//! - [`error`]: Error types and Result alias
//! - [`sections`]: Sectioning and command filtering
//! - [`writer`]: Output directory and file writing
//! - [`splitter`]: Main splitter service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod sections;
pub mod splitter;
pub mod types;
pub mod writer;

// Re-export main functions
pub use splitter::{split_document, split_suite};

// Re-export commonly used items
pub use error::{Result, SplitterError};
pub use types::{Document, Section, SplitReport};
