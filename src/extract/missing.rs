//! Missing product field extraction.

use super::json::{extract_embedded_json, reconcile};
use super::lines::salvage_key_values;
use super::types::ExtractionResult;
use crate::config::ExtractionConfig;
use crate::product::ProductRecord;
use tracing::debug;

/// Extract the fields `record` is missing from a missing-fields response.
///
/// An embedded JSON object is preferred. When none parses, recognized
/// `key: value` lines and bullets are salvaged instead. Either way, fields
/// the record already holds are dropped, so the result can be merged without
/// overwriting anything.
pub fn parse_missing_fields(
    text: &str,
    record: &ProductRecord,
    config: &ExtractionConfig,
) -> ExtractionResult {
    if let Some(fields) = extract_embedded_json(text, record, config.list_min_items) {
        return fields;
    }

    debug!("no embedded JSON object, salvaging key/value lines");
    reconcile(salvage_key_values(text), record, config.list_min_items)
}
