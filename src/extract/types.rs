//! Core types for extraction results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single extracted value: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A scalar value.
    Text(String),
    /// A list value.
    List(Vec<String>),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Create a list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    /// The scalar value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// The items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }

    /// True for an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// Force the value into list form.
    ///
    /// Text containing commas is split on them (pieces trimmed, empty pieces
    /// dropped); other text becomes a one-item list. Empty text yields an
    /// empty list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Text(s) if s.contains(',') => split_commas(&s),
            FieldValue::Text(s) if s.trim().is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s],
        }
    }

    /// Convert a JSON value. `null` has no field value.
    ///
    /// Arrays become lists of their items rendered as text, objects become
    /// compact JSON text, numbers and booleans their literal text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Array(items) => Some(FieldValue::List(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(json_item_text)
                    .collect(),
            )),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => {
                Some(FieldValue::Text(value.to_string()))
            }
        }
    }

    /// Convert into a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

fn json_item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Split a comma-joined string into trimmed, non-empty items.
pub(crate) fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Fields identified in a response, keyed by field name.
///
/// An absent key means the field was not found. A present key holding an
/// empty string means the field was found but empty; the two are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    fields: BTreeMap<String, FieldValue>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    /// Look up a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Look up a scalar field.
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Look up a list field.
    pub fn get_list(&self, field: &str) -> Option<&[String]> {
        self.get(field).and_then(FieldValue::as_list)
    }

    /// Whether the field was extracted.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Whether no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of extracted fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the fields for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &FieldValue) -> bool,
    {
        self.fields.retain(|k, v| keep(k, v));
    }

    /// Rewrite a field in place, if present.
    pub(crate) fn update<F>(&mut self, field: &str, f: F)
    where
        F: FnOnce(FieldValue) -> FieldValue,
    {
        if let Some(value) = self.fields.remove(field) {
            self.fields.insert(field.to_string(), f(value));
        }
    }

    /// Consume into the underlying map.
    pub fn into_map(self) -> BTreeMap<String, FieldValue> {
        self.fields
    }
}

impl FromIterator<(String, FieldValue)> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExtractionResult {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
