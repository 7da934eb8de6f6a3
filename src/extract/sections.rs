//! Sectioned-response splitting.
//!
//! A response is cut into named sections at known headers such as
//! `INSTAGRAM:`. Each header is searched with an ordered list of casing
//! strategies; the first strategy that occurs in the text wins, and only the
//! first occurrence of that header counts. A section runs from the end of its
//! header to the start of the next found header, or to the end of the text.
//!
//! When no header occurs at all, the text is divided among the requested
//! recipients by paragraphs (see [`divide_among`]).

use super::text::paragraphs;
use super::types::{ExtractionResult, FieldValue};
use tracing::debug;

/// Casing strategy used to spell a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCase {
    /// `INSTAGRAM:`
    Upper,
    /// `Instagram:` (spelled as the section's display name, e.g. `LinkedIn:`)
    Title,
}

impl HeaderCase {
    /// Strategies in the order they are tried.
    pub const PRIORITY: [HeaderCase; 2] = [HeaderCase::Upper, HeaderCase::Title];

    /// Spell the header for `display_name` in this casing.
    pub fn header(self, display_name: &str) -> String {
        match self {
            HeaderCase::Upper => format!("{}:", display_name.to_uppercase()),
            HeaderCase::Title => format!("{}:", display_name),
        }
    }
}

/// A section the splitter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec<'a> {
    /// Result key, e.g. `linkedin`.
    pub key: &'a str,
    /// Display spelling, e.g. `LinkedIn`.
    pub display_name: &'a str,
}

/// A header located in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderHit<'a> {
    /// Section key.
    pub key: &'a str,
    /// Byte offset where the header starts.
    pub start: usize,
    /// Byte offset just past the header.
    pub end: usize,
}

/// Locate the first occurrence of every section header, sorted by offset.
pub fn locate_headers<'a>(text: &str, sections: &[SectionSpec<'a>]) -> Vec<HeaderHit<'a>> {
    let mut hits: Vec<HeaderHit<'a>> = sections
        .iter()
        .filter_map(|section| {
            HeaderCase::PRIORITY.iter().find_map(|case| {
                let header = case.header(section.display_name);
                text.find(&header).map(|start| HeaderHit {
                    key: section.key,
                    start,
                    end: start + header.len(),
                })
            })
        })
        .collect();

    hits.sort_by_key(|hit| hit.start);
    hits
}

/// Split `text` into sections and keep those in `requested`.
///
/// Headers of sections that were not requested still end the preceding
/// section. Falls back to [`divide_among`] when no header is found.
pub fn split_sections(
    text: &str,
    sections: &[SectionSpec<'_>],
    requested: &[&str],
) -> ExtractionResult {
    let hits = locate_headers(text, sections);

    if hits.is_empty() {
        debug!(
            requested = requested.len(),
            "no section headers found, dividing text among recipients"
        );
        return divide_among(text, requested);
    }

    let mut result = ExtractionResult::new();
    for (i, hit) in hits.iter().enumerate() {
        if !requested.contains(&hit.key) {
            continue;
        }

        let end = hits
            .get(i + 1)
            .map_or(text.len(), |next| next.start)
            .max(hit.end);
        let content = text.get(hit.end..end).unwrap_or_default().trim();
        result.insert(hit.key, FieldValue::text(content));
    }

    result
}

/// Divide header-less text among the requested recipients.
///
/// With at least as many paragraphs as recipients, each recipient gets one
/// paragraph in request order. Otherwise every recipient gets the entire
/// trimmed text. Blank text or no recipients yield an empty result.
pub fn divide_among(text: &str, requested: &[&str]) -> ExtractionResult {
    let mut result = ExtractionResult::new();
    let trimmed = text.trim();
    if trimmed.is_empty() || requested.is_empty() {
        return result;
    }

    let parts = paragraphs(trimmed);
    if parts.len() >= requested.len() {
        for (key, part) in requested.iter().zip(parts) {
            result.insert(*key, FieldValue::Text(part));
        }
    } else {
        // Fewer paragraphs than recipients: each one receives the full text.
        // Kept for compatibility with existing consumers of this output.
        debug!(
            paragraphs = parts.len(),
            requested = requested.len(),
            "too few paragraphs, duplicating full text to every recipient"
        );
        for key in requested {
            result.insert(*key, FieldValue::text(trimmed));
        }
    }

    result
}
