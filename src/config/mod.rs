//! Configuration model for prodgen.
//!
//! This module defines the Config struct that represents `prodgen.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, environment overrides, and validation
//! of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::{ExtractionConfig, GenerationConfig};
