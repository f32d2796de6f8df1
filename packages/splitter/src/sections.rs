//! Sectioning and command filtering.
//!
//! A document is scanned line by line. Each marker line (`// Test <id>`)
//! closes the open section and starts a new one; the end-of-suite line
//! (`// ====`) closes the open section and stops the scan. Lines seen
//! before the first marker belong to no section and are dropped, separator
//! banners included.

use std::collections::HashMap;

use crate::config::{is_comment, is_end_marker, parse_marker};
use crate::types::Section;

/// Split a document into sections, in document order.
///
/// # Examples
/// ```
/// use suite_splitter::sections::find_sections;
///
/// let sections = find_sections("// Test 1\nrun foo\n// Test 2\nrun bar\n");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[1].id, "2");
/// assert_eq!(sections[1].commands(), vec!["run bar"]);
/// ```
pub fn find_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        if current.is_some() && is_end_marker(line) {
            tracing::debug!(line = line_number, "end of suite marker");
            break;
        }

        if let Some(id) = parse_marker(line) {
            if let Some(&previous) = first_seen.get(id) {
                tracing::warn!(
                    id,
                    first_line = previous,
                    line = line_number,
                    "duplicate test identifier, later section overwrites earlier output"
                );
            } else {
                first_seen.insert(id.to_string(), line_number);
            }

            sections.extend(current.replace(Section::new(id, line_number)));
            continue;
        }

        if let Some(section) = current.as_mut() {
            section.body.push(line.to_string());
        }
    }

    sections.extend(current);
    sections
}

/// Reduce raw body lines to commands.
///
/// Each line is trimmed; blank lines and comment lines are dropped. The
/// remaining lines keep their original order.
///
/// # Examples
/// ```
/// use suite_splitter::sections::extract_commands;
///
/// let commands = extract_commands(&["  run foo ", "", "// note", "run bar"]);
/// assert_eq!(commands, vec!["run foo", "run bar"]);
/// ```
pub fn extract_commands<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty() && !is_comment(line))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_find_sections_basic_scenario() {
        let text = "// Test 1\nrun foo\n// Test 2\nrun bar\nrun baz\n// ====\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "2"]);
        assert_eq!(sections[0].commands(), vec!["run foo"]);
        assert_eq!(sections[1].commands(), vec!["run bar", "run baz"]);
    }

    #[test]
    fn test_find_sections_last_section_runs_to_eof() {
        let text = "// Test 1\nbegin(T1)\n// Test 2\nbegin(T2)\nend(T2)";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "2"]);
        assert_eq!(sections[1].commands(), vec!["begin(T2)", "end(T2)"]);
    }

    #[test]
    fn test_find_sections_records_marker_lines() {
        let text = "header\n\n// Test 1\nrun foo\n\n// Test 1.1\nrun bar\n";
        let sections = find_sections(text);

        assert_eq!(sections[0].line, 3);
        assert_eq!(sections[1].line, 6);
    }

    #[test]
    fn test_find_sections_drops_preamble() {
        let text = "// Suite for the transaction manager\nbegin(T0)\n// Test 1\nbegin(T1)\n";
        let sections = find_sections(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].commands(), vec!["begin(T1)"]);
    }

    #[test]
    fn test_find_sections_stops_at_end_marker() {
        let text = "// Test 1\nrun foo\n// =========\n// Test 2\nrun bar\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1"]);
        assert_eq!(sections[0].body, vec!["run foo"]);
    }

    #[test]
    fn test_find_sections_separator_banner_before_first_test() {
        let text = "// ====\n// Transaction suite\n// ====\n// Test 1\nrun foo\n// Test 2\nrun bar\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "2"]);
        assert_eq!(sections[1].commands(), vec!["run bar"]);
    }

    #[test]
    fn test_find_sections_titled_banner_is_not_end_marker() {
        let text = "// ==== Transaction suite ====\n// Test 1\nrun foo\n// ==== Part two ====\n// Test 2\nrun bar\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "2"]);
        assert_eq!(sections[0].commands(), vec!["run foo"]);
    }

    #[test]
    fn test_find_sections_titled_marker_starts_new_section() {
        let text = "// Test 1\nrun foo\n// Test 2 - deadlock\nrun bar\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "2"]);
        assert_eq!(sections[0].commands(), vec!["run foo"]);
        assert_eq!(sections[1].commands(), vec!["run bar"]);
    }

    #[test]
    fn test_find_sections_unrecognized_marker_stays_in_body() {
        let text = "// Test 1\nrun foo\n// Test 2a\nrun bar\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1"]);
        // The malformed marker is a comment, so only its commands leak in
        assert_eq!(sections[0].commands(), vec!["run foo", "run bar"]);
    }

    #[test]
    fn test_find_sections_keeps_duplicates_in_order() {
        let text = "// Test 1\nfirst\n// Test 1\nsecond\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "1"]);
        assert_eq!(sections[1].commands(), vec!["second"]);
    }

    #[test]
    fn test_find_sections_crlf_input() {
        let text = "// Test 1\r\nrun foo\r\n// Test 2\r\nrun bar\r\n";
        let sections = find_sections(text);

        assert_eq!(ids(&sections), vec!["1", "2"]);
        assert_eq!(sections[0].commands(), vec!["run foo"]);
    }

    #[test]
    fn test_find_sections_empty_document() {
        assert!(find_sections("").is_empty());
        assert!(find_sections("no markers here\n").is_empty());
    }

    #[test]
    fn test_extract_commands_interspersed_noise() {
        let body = vec![
            "",
            "// Expected: T2 aborts",
            "begin(T1)",
            "   ",
            "  begin(T2)",
            "\t// indented comment",
            "W(T1,x1,101)\t",
        ];

        assert_eq!(
            extract_commands(&body),
            vec!["begin(T1)", "begin(T2)", "W(T1,x1,101)"]
        );
    }

    #[test]
    fn test_extract_commands_only_comments() {
        let body = vec!["// nothing to run", "", "//"];
        assert!(extract_commands(&body).is_empty());
    }

    #[test]
    fn test_extract_commands_keeps_inline_comment_text() {
        // Only a leading comment prefix makes a line a comment
        let body = vec!["dump() // show state"];
        assert_eq!(extract_commands(&body), vec!["dump() // show state"]);
    }
}
