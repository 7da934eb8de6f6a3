//! Heuristic salvage of a title and description from unmarked text.
//!
//! Guesses rely on line length and position only. They never fail: with no
//! usable line the guesses are empty strings.

use super::markers::first_marker;
use super::spec::DocumentKind;
use super::text::{char_len, non_empty_lines, truncate_chars};
use crate::config::ExtractionConfig;

/// Guess a title: the first line inside the title window, else the first
/// line cut to the window's maximum.
pub fn salvage_title(text: &str, config: &ExtractionConfig) -> String {
    let lines = non_empty_lines(text);
    let window = config.title_window();

    lines
        .iter()
        .find(|line| window.contains(char_len(line)))
        .map(|line| line.to_string())
        .or_else(|| lines.first().map(|line| truncate_chars(line, config.title_max_len)))
        .unwrap_or_default()
}

/// Guess a description that is not `title`.
///
/// `Title:` / `Description:` marker lines are never used. Prefers the first
/// long line; otherwise joins every other line with single spaces. When only
/// the title is left, the title doubles as the description. The result is
/// cut to `description_max_len`.
pub fn salvage_description(text: &str, title: &str, config: &ExtractionConfig) -> String {
    let rules = DocumentKind::Seo.marker_rules();
    let lines: Vec<&str> = non_empty_lines(text)
        .into_iter()
        .filter(|line| first_marker(line, &rules).is_none())
        .collect();

    if let Some(line) = lines
        .iter()
        .find(|line| char_len(line) >= config.description_min_len && **line != title)
    {
        return truncate_chars(line, config.description_max_len);
    }

    let remaining: Vec<&str> = lines.iter().copied().filter(|line| *line != title).collect();
    if remaining.is_empty() {
        let only = lines.first().copied().unwrap_or(title);
        return truncate_chars(only, config.description_max_len);
    }
    truncate_chars(&remaining.join(" "), config.description_max_len)
}
