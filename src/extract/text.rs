//! Line and length helpers shared by the extractors.
//!
//! Lengths are counted in characters, never bytes, so truncation cannot split
//! a multi-byte character.

/// Trimmed, non-empty lines of `text`, in order.
pub(crate) fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Length of `s` in characters.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `max` characters of `s`.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Paragraphs of `text`: runs of non-blank lines separated by blank lines.
///
/// Lines inside a paragraph are joined with `\n` as they appeared.
pub(crate) fn paragraphs(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.trim().lines() {
        if !line.trim().is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            result.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        result.push(current.join("\n"));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_lines_trims_and_skips_blanks() {
        let lines = non_empty_lines("  one \n\n\t\ntwo\n");
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 70), "short");
        assert_eq!(char_len("héllo"), 5);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "first line\nstill first\n\n  \nsecond\n\n\nthird";
        assert_eq!(
            paragraphs(text),
            vec!["first line\nstill first", "second", "third"]
        );
    }

    #[test]
    fn test_paragraphs_of_blank_text() {
        assert!(paragraphs(" \n\n ").is_empty());
    }
}
