//! Per-platform social media post extraction.

use super::sections::{SectionSpec, split_sections};
use super::spec::DocumentKind;
use crate::product::{Platform, PlatformSet};
use std::collections::BTreeMap;

/// Posts keyed by platform.
pub type SocialPosts = BTreeMap<Platform, String>;

fn platform_sections() -> Vec<SectionSpec<'static>> {
    DocumentKind::Social
        .field_specs()
        .iter()
        .filter_map(|spec| {
            spec.labels.first().map(|&display_name| SectionSpec {
                key: spec.field,
                display_name,
            })
        })
        .collect()
}

/// Split a social media response into one post per requested platform.
///
/// Every known platform header bounds the preceding post, even for platforms
/// that were not requested. A response without any header is divided among
/// the requested platforms by paragraph.
pub fn parse_social_response(text: &str, platforms: &PlatformSet) -> SocialPosts {
    let requested: Vec<&str> = platforms.iter().map(Platform::as_str).collect();
    let sections = split_sections(text, &platform_sections(), &requested);

    sections
        .into_iter()
        .filter_map(|(key, value)| {
            let platform = Platform::from_name(&key)?;
            let post = value.as_text()?.to_string();
            Some((platform, post))
        })
        .collect()
}
