//! Marker-based field extraction.
//!
//! A marker is a label at the start of a line followed directly by a colon,
//! e.g. `Title: ...`. Labels compare ASCII case-insensitively against the
//! trimmed line; a label appearing mid-line never matches.

use super::types::{ExtractionResult, FieldValue};

/// Maps one header label to the field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule<'a> {
    /// Label without the trailing colon, e.g. `Subject Line`.
    pub label: &'a str,
    /// Field name the captured value is stored under.
    pub field: &'a str,
}

/// A marker found on a specific line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit<'a> {
    /// Zero-based index of the line in `text.lines()`.
    pub line_index: usize,
    /// Field the matched rule fills.
    pub field: &'a str,
    /// Trimmed remainder of the line after the colon.
    pub value: String,
}

/// Extract every marked field from `text`.
///
/// Lines are scanned in order. On each line the rules are tried in the given
/// order and the first match wins. A field matched on several lines keeps
/// the last value. Returns an empty result when nothing matches.
///
/// # Example
///
/// ```
/// use prodgen::extract::{MarkerRule, extract_markers};
///
/// let rules = [
///     MarkerRule { label: "Title", field: "title" },
///     MarkerRule { label: "Description", field: "description" },
/// ];
/// let result = extract_markers("Title: Trail Pack\nDescription: Carries it all", &rules);
/// assert_eq!(result.get_text("title"), Some("Trail Pack"));
/// assert_eq!(result.get_text("description"), Some("Carries it all"));
/// ```
pub fn extract_markers(text: &str, rules: &[MarkerRule<'_>]) -> ExtractionResult {
    let mut result = ExtractionResult::new();

    for line in text.lines() {
        if let Some((field, value)) = match_line(line, rules) {
            result.insert(field, FieldValue::Text(value.to_string()));
        }
    }

    result
}

/// Find the first line carrying any of the markers.
pub fn first_marker<'a>(text: &str, rules: &[MarkerRule<'a>]) -> Option<MarkerHit<'a>> {
    text.lines()
        .enumerate()
        .find_map(|(line_index, line)| {
            match_line(line, rules).map(|(field, value)| MarkerHit {
                line_index,
                field,
                value: value.to_string(),
            })
        })
}

fn match_line<'a, 'l>(line: &'l str, rules: &[MarkerRule<'a>]) -> Option<(&'a str, &'l str)> {
    let line = line.trim();
    rules
        .iter()
        .find_map(|rule| strip_label(line, rule.label).map(|rest| (rule.field, rest.trim())))
}

/// Strip `label:` from the start of `line`, ignoring ASCII case.
pub(crate) fn strip_label<'l>(line: &'l str, label: &str) -> Option<&'l str> {
    let head = line.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    line[label.len()..].strip_prefix(':')
}
