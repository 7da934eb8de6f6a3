//! Declarative field descriptions per document type.
//!
//! Each supported document lists the header labels that mark its fields,
//! the shape of each value, and an optional length hint. Length hints only
//! steer salvage guesses; out-of-range values are never rejected.

use super::markers::MarkerRule;
use std::fmt;

/// Documents the extractors know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// SEO title and meta description.
    Seo,
    /// Marketing email subject and body.
    Email,
    /// One post per social platform.
    Social,
    /// Product fields the caller's record lacks.
    MissingFields,
}

/// Expected shape of an extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// A single short line.
    Short,
    /// Free-form text, possibly spanning lines.
    Paragraph,
    /// A list of items.
    List,
}

/// Preferred length window in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthHint {
    pub min: usize,
    pub max: usize,
}

impl LengthHint {
    /// Whether `len` falls within the window (inclusive).
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl fmt::Display for LengthHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Description of one field of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field name used in results.
    pub field: &'static str,
    /// Header labels, in priority order, without the trailing colon.
    pub labels: &'static [&'static str],
    /// Expected value shape.
    pub shape: ValueShape,
    /// Length preference used by salvage heuristics.
    pub length: Option<LengthHint>,
}

impl FieldSpec {
    /// Whether the field holds a list.
    pub fn is_list(&self) -> bool {
        self.shape == ValueShape::List
    }
}

/// Title window: 30-70 characters.
pub const TITLE_LENGTH: LengthHint = LengthHint { min: 30, max: 70 };

/// Description window: at least 120, cut at 160 characters.
pub const DESCRIPTION_LENGTH: LengthHint = LengthHint { min: 120, max: 160 };

/// Email subject window requested from the model.
pub const SUBJECT_LENGTH: LengthHint = LengthHint { min: 40, max: 60 };

/// A first line shorter than this counts as an unmarked subject.
pub const SUBJECT_FALLBACK_MAX: usize = 100;

/// A guessed subject sentence longer than this is cut and ends in `...`.
pub const SUBJECT_SENTENCE_MAX: usize = 60;

/// Product record fields that hold lists, in table order.
pub fn list_fields() -> impl Iterator<Item = &'static str> {
    MISSING_FIELDS
        .iter()
        .filter(|spec| spec.is_list())
        .map(|spec| spec.field)
}

/// Whether `field` is one of the list-valued product fields.
pub fn is_list_field(field: &str) -> bool {
    DocumentKind::MissingFields
        .field_spec(field)
        .is_some_and(FieldSpec::is_list)
}

/// Length window of a field, when it has one.
pub fn length_hint(kind: DocumentKind, field: &str) -> Option<LengthHint> {
    kind.field_spec(field).and_then(|spec| spec.length)
}

const SEO_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: "title",
        labels: &["Title"],
        shape: ValueShape::Short,
        length: Some(TITLE_LENGTH),
    },
    FieldSpec {
        field: "description",
        labels: &["Description"],
        shape: ValueShape::Paragraph,
        length: Some(DESCRIPTION_LENGTH),
    },
];

const EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: "subject",
        labels: &["Subject Line", "Subject"],
        shape: ValueShape::Short,
        length: Some(SUBJECT_LENGTH),
    },
    FieldSpec {
        field: "body",
        labels: &[],
        shape: ValueShape::Paragraph,
        length: None,
    },
];

const SOCIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: "instagram",
        labels: &["Instagram"],
        shape: ValueShape::Paragraph,
        length: None,
    },
    FieldSpec {
        field: "facebook",
        labels: &["Facebook"],
        shape: ValueShape::Paragraph,
        length: None,
    },
    FieldSpec {
        field: "twitter",
        labels: &["Twitter"],
        shape: ValueShape::Paragraph,
        length: Some(LengthHint { min: 1, max: 280 }),
    },
    FieldSpec {
        field: "linkedin",
        labels: &["LinkedIn"],
        shape: ValueShape::Paragraph,
        length: None,
    },
];

const MISSING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: "category",
        labels: &["Category", "Categories"],
        shape: ValueShape::Short,
        length: None,
    },
    FieldSpec {
        field: "subcategory",
        labels: &["Subcategory", "Sub-category", "Subcategories"],
        shape: ValueShape::Short,
        length: None,
    },
    FieldSpec {
        field: "features",
        labels: &["Features", "Feature", "Key Features"],
        shape: ValueShape::List,
        length: None,
    },
    FieldSpec {
        field: "materials",
        labels: &["Materials", "Material", "Composition"],
        shape: ValueShape::List,
        length: None,
    },
    FieldSpec {
        field: "tags",
        labels: &["Tags", "Tag", "Keywords"],
        shape: ValueShape::List,
        length: None,
    },
];

impl DocumentKind {
    /// Field descriptions for this document.
    pub fn field_specs(self) -> &'static [FieldSpec] {
        match self {
            DocumentKind::Seo => SEO_FIELDS,
            DocumentKind::Email => EMAIL_FIELDS,
            DocumentKind::Social => SOCIAL_FIELDS,
            DocumentKind::MissingFields => MISSING_FIELDS,
        }
    }

    /// Look up one field's description.
    pub fn field_spec(self, field: &str) -> Option<&'static FieldSpec> {
        self.field_specs().iter().find(|spec| spec.field == field)
    }

    /// Marker rules for every labelled field, in priority order.
    pub fn marker_rules(self) -> Vec<MarkerRule<'static>> {
        self.field_specs()
            .iter()
            .flat_map(|spec| {
                spec.labels.iter().map(move |&label| MarkerRule {
                    label,
                    field: spec.field,
                })
            })
            .collect()
    }
}
