//! Line-oriented key/value salvage.
//!
//! Used when a response that should carry JSON does not parse. Headers look
//! like `Features: a, b` and bullets like `- item`; header keys go through the
//! synonym table and unrecognized keys are ignored.

use super::json::normalize_lists;
use super::synonyms::canonical_field;
use super::types::{ExtractionResult, FieldValue, split_commas};

const BULLETS: [char; 3] = ['-', '•', '*'];

/// Field currently collecting items.
struct OpenField {
    field: &'static str,
    items: Vec<String>,
}

impl OpenField {
    /// Store the collected items: one item is text, several are a list.
    fn close_into(self, result: &mut ExtractionResult) {
        let mut items = self.items;
        match items.len() {
            0 => {}
            1 => result.insert(self.field, FieldValue::Text(items.remove(0))),
            _ => result.insert(self.field, FieldValue::List(items)),
        }
    }
}

/// Salvage recognized `key: value` headers and bullet items from `text`.
///
/// List-valued product fields always come out as lists.
pub fn salvage_key_values(text: &str) -> ExtractionResult {
    let mut result = ExtractionResult::new();
    let mut open: Option<OpenField> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(item) = line.strip_prefix(BULLETS) {
            if let Some(current) = open.as_mut() {
                current.items.push(item.trim().to_string());
            }
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once(':') else {
            continue;
        };

        if let Some(previous) = open.take() {
            previous.close_into(&mut result);
        }

        // An unrecognized header closes the current field; its bullets are dropped.
        open = canonical_field(raw_key).map(|field| OpenField {
            field,
            items: split_commas(raw_value),
        });
    }

    if let Some(last) = open {
        last.close_into(&mut result);
    }

    normalize_lists(result)
}
