//! Product description extraction.

use serde::{Deserialize, Serialize};

/// A generated long-form description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionContent {
    pub detailed_description: String,
}

/// The whole trimmed response is the description.
pub fn parse_description_response(text: &str) -> DescriptionContent {
    DescriptionContent {
        detailed_description: text.trim().to_string(),
    }
}
