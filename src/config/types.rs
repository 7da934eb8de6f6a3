//! Configuration sections and defaults for prodgen.
//!
//! This module defines the generation and extraction sections of the
//! Config struct together with the default value functions used by serde.

use crate::extract::{DESCRIPTION_LENGTH, LengthHint, SUBJECT_FALLBACK_MAX, TITLE_LENGTH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings for the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model identifier passed to the backend command as `{model}`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Token budget passed to the backend command as `{max_tokens}`.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature passed to the backend command as `{temperature}`.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Seconds before a backend process is killed.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Command template for text completions. The prompt is written to stdin.
    ///
    /// Placeholders: `{model}`, `{max_tokens}`, `{temperature}`, `{system}`.
    #[serde(default = "default_command")]
    pub command: String,

    /// Command template for image generation (empty disables images).
    ///
    /// The image prompt is written to stdin and the first non-empty output
    /// line is taken as the image URL.
    #[serde(default)]
    pub image_command: String,

    /// Extra environment variables for backend processes.
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout_seconds(),
            command: default_command(),
            image_command: String::new(),
            environment: BTreeMap::new(),
        }
    }
}

/// Heuristic parameters handed to the extractors.
///
/// Lengths are counted in characters. None of these are validation limits:
/// they only steer the salvage guesses when a response lacks markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Shortest line accepted as a salvaged title.
    pub title_min_len: usize,
    /// Longest line accepted as a salvaged title; also the truncation length.
    pub title_max_len: usize,
    /// Shortest line accepted as a salvaged description.
    pub description_min_len: usize,
    /// Truncation length for salvaged descriptions.
    pub description_max_len: usize,
    /// A first line shorter than this is taken as an unmarked email subject.
    pub subject_max_len: usize,
    /// Existing lists with fewer entries than this may be replaced.
    pub list_min_items: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_min_len: TITLE_LENGTH.min,
            title_max_len: TITLE_LENGTH.max,
            description_min_len: DESCRIPTION_LENGTH.min,
            description_max_len: DESCRIPTION_LENGTH.max,
            subject_max_len: SUBJECT_FALLBACK_MAX,
            list_min_items: default_list_min_items(),
        }
    }
}

impl ExtractionConfig {
    /// Configured salvage window for titles.
    pub fn title_window(&self) -> LengthHint {
        LengthHint {
            min: self.title_min_len,
            max: self.title_max_len,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
pub(crate) fn default_max_tokens() -> u32 {
    1000
}
pub(crate) fn default_temperature() -> f32 {
    0.7
}
pub(crate) fn default_timeout_seconds() -> u64 {
    30
}
pub(crate) fn default_command() -> String {
    "llm -m {model} -o max_tokens {max_tokens} -o temperature {temperature} -s {system}"
        .to_string()
}
pub(crate) fn default_list_min_items() -> usize {
    3
}
