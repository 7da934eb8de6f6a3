//! Best-effort extraction of structured fields from generated text.
//!
//! Every extractor is a pure function over one response string plus small
//! context parameters. None of them fail: malformed or unexpected input
//! degrades to the next strategy and finally to partial or empty results.
//!
//! Building blocks:
//! - [`markers`]: `Label: value` lines
//! - [`sections`]: `INSTAGRAM:` style sections with a paragraph fallback
//! - [`json`]: embedded JSON objects, reconciled against the product record
//! - [`lines`]: `key: value` and bullet salvage when JSON does not parse
//! - [`spec`]: labels, shapes and length windows per document, read by all
//!   of the above
//! - [`salvage`]: length and position heuristics for titles and descriptions
//!
//! Pipelines per document: [`seo`], [`email`], [`social`], [`missing`] and
//! [`description`].

pub mod description;
pub mod email;
pub mod json;
pub mod lines;
pub mod markers;
pub mod missing;
pub mod salvage;
pub mod sections;
pub mod seo;
pub mod social;
pub mod spec;
pub mod synonyms;
mod text;
pub mod types;


pub use description::{DescriptionContent, parse_description_response};
pub use email::{EmailContent, parse_email_response};
pub use markers::{MarkerHit, MarkerRule, extract_markers, first_marker};
pub use missing::parse_missing_fields;
pub use sections::{HeaderCase, SectionSpec, divide_among, split_sections};
pub use seo::{SeoContent, parse_seo_response};
pub use social::{SocialPosts, parse_social_response};
pub use spec::{
    DESCRIPTION_LENGTH, DocumentKind, FieldSpec, LengthHint, SUBJECT_FALLBACK_MAX, SUBJECT_LENGTH,
    SUBJECT_SENTENCE_MAX, TITLE_LENGTH, ValueShape, is_list_field, length_hint, list_fields,
};
pub(crate) use types::split_commas;
pub use types::{ExtractionResult, FieldValue};
