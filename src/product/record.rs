//! Product record: the caller's partially filled product data.

use crate::error::{ProdgenError, Result};
use crate::extract::{ExtractionResult, is_list_field, split_commas};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A product as a JSON object of named fields.
///
/// Typical fields are `name`, `brand`, `price`, `category`, `subcategory`,
/// `features`, `materials`, `colors`, `tags`, `basic_description`,
/// `detailed_description`, `seo_title`, `seo_description` and
/// `marketing_copy`. Unknown fields are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord {
    fields: Map<String, Value>,
}

impl ProductRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ProdgenError::UserError(format!(
                "product data must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a record from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ProdgenError::UserError(format!("invalid product JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Load a record from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProdgenError::UserError(format!(
                "failed to read product file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether the field exists at all, even if empty.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Whether the field holds a truthy value.
    ///
    /// Absent, `null`, `""`, `0`, `false`, `[]` and `{}` are all falsy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Whether a nested field, e.g. `marketing_copy.email`, is truthy.
    pub fn is_truthy_at(&self, path: &[&str]) -> bool {
        let Some((first, rest)) = path.split_first() else {
            return false;
        };
        let mut value = match self.get(first) {
            Some(v) => v,
            None => return false,
        };
        for key in rest {
            match value.get(key) {
                Some(v) => value = v,
                None => return false,
            }
        }
        is_truthy(value)
    }

    /// Field rendered as text; empty when absent or not a scalar.
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Field as a list of strings.
    ///
    /// A string value is split on commas; absent or other values are empty.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect(),
            Some(Value::String(s)) => split_commas(s),
            _ => Vec::new(),
        }
    }

    /// Number of entries a list-valued field holds.
    pub fn list_len(&self, key: &str) -> usize {
        self.list(key).len()
    }

    /// Whether an extracted value for `key` may be stored in this record.
    ///
    /// List fields accept when absent or holding fewer than
    /// `list_min_items` entries; other fields only when absent or falsy.
    pub fn accepts(&self, key: &str, list_min_items: usize) -> bool {
        if is_list_field(key) {
            !self.contains(key) || self.list_len(key) < list_min_items
        } else {
            !self.is_truthy(key)
        }
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Set a nested field, creating intermediate objects as needed.
    ///
    /// A non-object value on the path is replaced by an object.
    pub fn set_at(&mut self, path: &[&str], value: Value) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut map = &mut self.fields;
        for key in parents {
            let entry = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(inner) = entry else {
                return;
            };
            map = inner;
        }
        map.insert(last.to_string(), value);
    }

    /// Merge extracted fields without overwriting known values.
    ///
    /// Each field goes through [`ProductRecord::accepts`]; returns the names
    /// of the fields that were stored.
    pub fn merge_missing(
        &mut self,
        extracted: &ExtractionResult,
        list_min_items: usize,
    ) -> Vec<String> {
        let mut merged = Vec::new();
        for (key, value) in extracted.iter() {
            if self.accepts(key, list_min_items) {
                self.set(key, value.to_json());
                merged.push(key.to_string());
            }
        }
        merged
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
