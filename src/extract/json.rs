//! Embedded-JSON extraction and reconciliation.
//!
//! Responses often wrap a JSON object in prose or code fences. The object is
//! taken from the first `{` to the last `}` and parsed with serde_json. Parsed
//! fields are then reconciled against the caller's product record so that
//! known-good values are never replaced.

use super::spec::{is_list_field, list_fields};
use super::types::{ExtractionResult, FieldValue};
use crate::product::ProductRecord;
use serde_json::{Map, Value};
use tracing::debug;

/// Slice from the first `{` to the last `}` of `text`, inclusive.
///
/// Returns `None` when either brace is missing or they are out of order.
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse the embedded object of `text`.
///
/// Unparsable data and non-object values both mean "no structured data".
pub fn parse_embedded_object(text: &str) -> Option<Map<String, Value>> {
    let candidate = find_json_object(text.trim())?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "embedded JSON did not parse");
            None
        }
    }
}

/// Extract the embedded object of `text` as fields the record still needs.
///
/// Returns `None` when no object parses, so the caller can fall back to
/// line salvage. A parsed object is final even when reconciliation drops
/// every key.
pub fn extract_embedded_json(
    text: &str,
    record: &ProductRecord,
    list_min_items: usize,
) -> Option<ExtractionResult> {
    let object = parse_embedded_object(text)?;

    let fields: ExtractionResult = object
        .iter()
        .filter_map(|(key, value)| FieldValue::from_json(value).map(|v| (key.clone(), v)))
        .collect();

    Some(reconcile(normalize_lists(fields), record, list_min_items))
}

/// Make sure every list-valued product field holds a list.
pub fn normalize_lists(mut fields: ExtractionResult) -> ExtractionResult {
    for field in list_fields() {
        fields.update(field, |value| FieldValue::List(value.into_list()));
    }
    fields
}

/// Drop every field the record already holds.
///
/// List fields survive when the record lacks them or holds fewer than
/// `list_min_items` entries; other fields survive only when the record's
/// value is absent or falsy.
pub fn reconcile(
    mut fields: ExtractionResult,
    record: &ProductRecord,
    list_min_items: usize,
) -> ExtractionResult {
    fields.retain(|key, _| {
        let keep = record.accepts(key, list_min_items);
        if !keep {
            debug!(
                field = key,
                list = is_list_field(key),
                "dropping field already present in record"
            );
        }
        keep
    });
    fields
}
