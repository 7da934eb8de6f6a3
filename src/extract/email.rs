//! Marketing email subject and body extraction.

use super::markers::{MarkerRule, first_marker};
use super::spec::{DocumentKind, SUBJECT_SENTENCE_MAX};
use super::text::{char_len, non_empty_lines, truncate_chars};
use crate::config::ExtractionConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

const ELLIPSIS: &str = "...";

/// Email subject and body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

/// Extract subject and body from an email response.
///
/// # Example
///
/// ```
/// use prodgen::config::ExtractionConfig;
/// use prodgen::extract::parse_email_response;
///
/// let email = parse_email_response(
///     "Subject: Big Sale!\n\nBody line one.\nBody line two.",
///     &ExtractionConfig::default(),
/// );
/// assert_eq!(email.subject, "Big Sale!");
/// assert_eq!(email.body, "Body line one.\nBody line two.");
/// ```
pub fn parse_email_response(text: &str, config: &ExtractionConfig) -> EmailContent {
    let text = text.trim();
    EmailContent {
        subject: extract_subject(text, config),
        body: extract_body(text),
    }
}

fn subject_rules() -> Vec<MarkerRule<'static>> {
    DocumentKind::Email.marker_rules()
}

/// The subject: the `Subject Line:` / `Subject:` marker value, or a guess.
///
/// Without a marker the first line is used when it is shorter than
/// `subject_max_len`; otherwise the first sentence, shortened with an
/// ellipsis past 60 characters.
pub fn extract_subject(text: &str, config: &ExtractionConfig) -> String {
    if let Some(hit) = first_marker(text, &subject_rules()) {
        return hit.value;
    }

    debug!("no subject marker, guessing subject from first line");
    let lines = non_empty_lines(text);
    if let Some(first) = lines.first()
        && char_len(first) < config.subject_max_len
    {
        return first.to_string();
    }

    let sentence = text.split('.').next().unwrap_or_default().trim();
    if char_len(sentence) <= SUBJECT_SENTENCE_MAX {
        sentence.to_string()
    } else {
        let keep = SUBJECT_SENTENCE_MAX - ELLIPSIS.len();
        format!("{}{}", truncate_chars(sentence, keep), ELLIPSIS)
    }
}

/// The body: everything after the subject marker line, minus the blank
/// lines directly following it.
///
/// Without a marker (or with nothing after it) the body is every line after
/// the first, or the whole text when there is only one line.
pub fn extract_body(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    if let Some(hit) = first_marker(text, &subject_rules()) {
        let mut start = hit.line_index + 1;
        while start < lines.len() && lines[start].trim().is_empty() {
            start += 1;
        }
        if start < lines.len() {
            return lines[start..].join("\n");
        }
    }

    if lines.len() > 1 {
        return lines[1..].join("\n").trim().to_string();
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> EmailContent {
        parse_email_response(text, &ExtractionConfig::default())
    }

    #[test]
    fn test_subject_line_marker() {
        let text = "Subject Line: Your Trail Pack Is Here\n\n\nHi there,\n\nMeet the pack.";
        let email = parse(text);
        assert_eq!(email.subject, "Your Trail Pack Is Here");
        assert_eq!(email.body, "Hi there,\n\nMeet the pack.");
    }

    #[test]
    fn test_marker_after_preamble() {
        let text = "Here is your email:\nsubject: Lower case works\nBody text";
        let email = parse(text);
        assert_eq!(email.subject, "Lower case works");
        assert_eq!(email.body, "Body text");
    }

    #[test]
    fn test_no_marker_short_first_line() {
        let text = "Gear up for the weekend\nOur new pack is here.\nShop now.";
        let email = parse(text);
        assert_eq!(email.subject, "Gear up for the weekend");
        assert_eq!(email.body, "Our new pack is here.\nShop now.");
    }

    #[test]
    fn test_no_marker_long_first_line_uses_sentence() {
        let first = format!("Short opener. {}", "word ".repeat(30));
        let email = parse(&first);
        assert_eq!(email.subject, "Short opener");
        assert_eq!(email.body, first.trim());
    }

    #[test]
    fn test_long_sentence_gets_ellipsis() {
        let text = "a".repeat(120);
        let email = parse(&text);
        assert_eq!(email.subject, format!("{}...", "a".repeat(57)));
        assert_eq!(char_len(&email.subject), 60);
    }

    #[test]
    fn test_sentence_at_cutoff_kept_whole() {
        let sentence = "b".repeat(SUBJECT_SENTENCE_MAX);
        let text = format!("{}. {}", sentence, "word ".repeat(30));
        assert_eq!(parse(&text).subject, sentence);

        let longer = format!("{}. tail", "b".repeat(SUBJECT_SENTENCE_MAX + 1));
        let subject = parse(&format!("{} {}", longer, "word ".repeat(20))).subject;
        assert_eq!(subject, format!("{}...", "b".repeat(57)));
    }

    #[test]
    fn test_marker_without_body_falls_back() {
        let text = "Intro line\nSubject: Only subject";
        let email = parse(text);
        assert_eq!(email.subject, "Only subject");
        assert_eq!(email.body, "Subject: Only subject");
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(parse(""), EmailContent::default());
    }
}
