//! Fixed paths, patterns and naming rules for the splitter.

use regex::Regex;
use std::sync::LazyLock;

/// Source document read by the binary, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "test_suite.txt";

/// Directory that receives one file per test case.
pub const DEFAULT_OUTPUT_DIR: &str = "tests";

/// Prefix that marks a line as a comment.
pub const COMMENT_PREFIX: &str = "//";

/// Output file name prefix, followed by the test identifier.
pub const OUTPUT_FILE_PREFIX: &str = "test";

/// Output file extension (without the dot).
pub const OUTPUT_FILE_EXTENSION: &str = "txt";

/// Marker line: `// Test <id>` where the id is ASCII digits and dots,
/// optionally followed by whitespace and a free-text title.
/// Captures: (1) the identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^//\s*Test\s+([0-9][0-9.]*)(?:\s.*)?$").expect("valid regex")
});

/// End-of-suite separator: `// ====` (four or more `=`, nothing else).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static END_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//\s*={4,}$").expect("valid regex"));

/// Extract the test identifier from a marker line.
///
/// Surrounding whitespace is ignored, as is a title separated from the
/// identifier by whitespace. Returns `None` for any line that is not a
/// marker, including markers whose identifier contains letters.
///
/// # Examples
/// ```
/// use suite_splitter::config::parse_marker;
///
/// assert_eq!(parse_marker("// Test 3.2"), Some("3.2"));
/// assert_eq!(parse_marker("// Test 4 - deadlock"), Some("4"));
/// assert_eq!(parse_marker("// Test 3a"), None);
/// assert_eq!(parse_marker("W(T1,x1,101)"), None);
/// ```
pub fn parse_marker(line: &str) -> Option<&str> {
    MARKER_PATTERN
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// Check whether a line is the end-of-suite separator.
///
/// # Examples
/// ```
/// use suite_splitter::config::is_end_marker;
///
/// assert!(is_end_marker("// ===================="));
/// assert!(!is_end_marker("// ==== Transaction suite ===="));
/// ```
pub fn is_end_marker(line: &str) -> bool {
    END_MARKER_PATTERN.is_match(line.trim())
}

/// Check whether a line is a comment once surrounding whitespace is removed.
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT_PREFIX)
}

/// Build the output file name for a test identifier.
///
/// The identifier is used verbatim, dots included.
///
/// # Examples
/// ```
/// use suite_splitter::config::output_file_name;
///
/// assert_eq!(output_file_name("10.3"), "test10.3.txt");
/// ```
pub fn output_file_name(id: &str) -> String {
    format!("{OUTPUT_FILE_PREFIX}{id}.{OUTPUT_FILE_EXTENSION}")
}
