//! Config struct definition.

use super::types::{ExtractionConfig, GenerationConfig};
use serde::{Deserialize, Serialize};

/// Configuration for prodgen.
///
/// This struct represents the contents of `prodgen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation backend settings.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Extraction heuristics.
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

