//! Field-name synonyms for line salvage.
//!
//! The recognized spellings are the header labels of the missing-fields
//! document in [`super::spec`].

use super::spec::DocumentKind;

/// Canonical field name for a raw header key, if recognized.
///
/// The key is trimmed and compared case-insensitively.
pub fn canonical_field(raw_key: &str) -> Option<&'static str> {
    let key = raw_key.trim();
    DocumentKind::MissingFields
        .field_specs()
        .iter()
        .find(|spec| spec.labels.iter().any(|label| label.eq_ignore_ascii_case(key)))
        .map(|spec| spec.field)
}
