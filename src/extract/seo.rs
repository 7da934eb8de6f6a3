//! SEO title and meta description extraction.
//!
//! Strategies, in order:
//! 1. `Title:` / `Description:` markers.
//! 2. Heading blocks: a blank-line separated block whose first line is only
//!    a `Title`, `# Description` or `**Title:**` style heading supplies its
//!    second line.
//! 3. Heuristic salvage for whatever is still missing.

use super::markers::extract_markers;
use super::salvage::{salvage_description, salvage_title};
use super::spec::DocumentKind;
use crate::config::ExtractionConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:#+\s*)?\**(title|description)\**:?\**\s*$").unwrap());

/// SEO title and meta description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoContent {
    pub title: String,
    pub description: String,
}

impl SeoContent {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Fill empty fields from `other`.
    fn fill_from(&mut self, other: SeoContent) {
        if self.title.is_empty() {
            self.title = other.title;
        }
        if self.description.is_empty() {
            self.description = other.description;
        }
    }
}

/// Extract SEO content from a response.
pub fn parse_seo_response(text: &str, config: &ExtractionConfig) -> SeoContent {
    let mut content = from_markers(text);
    if content.is_complete() {
        return content;
    }

    debug!(
        has_title = !content.title.is_empty(),
        has_description = !content.description.is_empty(),
        "SEO markers incomplete, trying heading blocks"
    );
    content.fill_from(from_heading_blocks(text));
    if content.is_complete() {
        return content;
    }

    debug!("SEO heading blocks incomplete, salvaging from raw lines");
    if content.title.is_empty() {
        content.title = salvage_title(text, config);
    }
    if content.description.is_empty() {
        content.description = salvage_description(text, &content.title, config);
    }
    content
}

fn from_markers(text: &str) -> SeoContent {
    let markers = extract_markers(text, &DocumentKind::Seo.marker_rules());
    SeoContent {
        title: markers.get_text("title").unwrap_or_default().to_string(),
        description: markers.get_text("description").unwrap_or_default().to_string(),
    }
}

fn from_heading_blocks(text: &str) -> SeoContent {
    let mut content = SeoContent::default();
    let rules = DocumentKind::Seo.marker_rules();

    for block in text.split("\n\n").map(str::trim) {
        let mut lines = block.lines();
        let Some(heading) = lines.next() else {
            continue;
        };
        let Some(captures) = HEADING_RE.captures(heading.trim()) else {
            continue;
        };
        let Some(value) = lines.next().map(str::trim) else {
            continue;
        };
        if !extract_markers(value, &rules).is_empty() {
            continue;
        }

        if captures[1].eq_ignore_ascii_case("title") {
            content.title = value.to_string();
        } else {
            content.description = value.to_string();
        }
    }

    content
}
