//! Product data flattened into template variables.

use super::template::TemplateVars;
use crate::product::{ProductRecord, StyleOptions};

/// Text renderings of a product record, ready for prompt templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductContext {
    pub name: String,
    pub brand: String,
    pub price: String,
    pub category: String,
    pub subcategory: String,
    pub basic_description: String,
    pub detailed_description: String,
    pub features: Vec<String>,
    pub materials: Vec<String>,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
}

impl ProductContext {
    /// Read the prompt-relevant fields of `record`.
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            name: record.text("name"),
            brand: record.text("brand"),
            price: record.text("price"),
            category: record.text("category"),
            subcategory: record.text("subcategory"),
            basic_description: record.text("basic_description"),
            detailed_description: record.text("detailed_description"),
            features: record.list("features"),
            materials: record.list("materials"),
            colors: record.list("colors"),
            tags: record.list("tags"),
        }
    }

    /// `Category > Subcategory`, or just the category.
    pub fn category_path(&self) -> String {
        if self.subcategory.is_empty() {
            self.category.clone()
        } else {
            format!("{} > {}", self.category, self.subcategory)
        }
    }

    /// The detailed description, falling back to the basic one.
    pub fn best_description(&self) -> &str {
        if self.detailed_description.is_empty() {
            &self.basic_description
        } else {
            &self.detailed_description
        }
    }

    /// Tags with spaces removed, for hashtags.
    pub fn hashtag_keywords(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.replace(' ', "")).collect()
    }

    /// Convert to template variables.
    ///
    /// Lists come in two renderings: `features` joined with commas and
    /// `features_bullets` with one `• item` per line.
    pub fn to_template_vars(&self) -> TemplateVars {
        let mut vars = TemplateVars::new();

        let scalars = [
            ("name", &self.name),
            ("brand", &self.brand),
            ("price", &self.price),
            ("category", &self.category),
            ("subcategory", &self.subcategory),
            ("basic_description", &self.basic_description),
            ("detailed_description", &self.detailed_description),
        ];
        for (key, value) in scalars {
            vars.insert(key.to_string(), value.clone());
        }

        let lists = [
            ("features", &self.features),
            ("materials", &self.materials),
            ("colors", &self.colors),
            ("tags", &self.tags),
        ];
        for (key, items) in lists {
            vars.insert(key.to_string(), items.join(", "));
            vars.insert(format!("{}_bullets", key), bullets(items));
        }

        vars.insert("category_path".to_string(), self.category_path());
        vars.insert(
            "description".to_string(),
            self.best_description().to_string(),
        );
        vars
    }
}

/// Add the style variables `tone`, `audience`, `length` and `keywords`.
///
/// `default_tone` applies when the style leaves the tone unset.
pub fn insert_style_vars(vars: &mut TemplateVars, style: &StyleOptions, default_tone: &str) {
    vars.insert("tone".to_string(), style.tone_or(default_tone).to_string());
    vars.insert("audience".to_string(), style.audience().to_string());
    vars.insert(
        "length".to_string(),
        style.length.unwrap_or_default().as_str().to_string(),
    );
    vars.insert("keywords".to_string(), style.keywords.join(", "));
}

/// One `• item` line per entry.
pub fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
