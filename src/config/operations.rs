//! Config loading, validation, and environment overrides.

use super::model::Config;
use crate::error::{ProdgenError, Result};
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "prodgen.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ProdgenError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ProdgenError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `prodgen.yaml` in the
    /// working directory is used when present, otherwise defaults apply.
    /// Environment overrides are applied last and the result is validated.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                debug!(path = DEFAULT_CONFIG_FILE, "loading config from working directory");
                Self::load(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ProdgenError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ProdgenError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Apply `MODEL_NAME`, `MAX_TOKENS` and `TEMPERATURE` overrides.
    ///
    /// `lookup` resolves a variable name to its value; the CLI passes the
    /// process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("MODEL_NAME").filter(|v| !v.trim().is_empty()) {
            self.generation.model = model.trim().to_string();
        }

        if let Some(raw) = lookup("MAX_TOKENS") {
            self.generation.max_tokens = raw.trim().parse().map_err(|_| {
                ProdgenError::ConfigError(format!(
                    "MAX_TOKENS must be a positive integer (found '{}')",
                    raw
                ))
            })?;
        }

        if let Some(raw) = lookup("TEMPERATURE") {
            self.generation.temperature = raw.trim().parse().map_err(|_| {
                ProdgenError::ConfigError(format!("TEMPERATURE must be a number (found '{}')", raw))
            })?;
        }

        Ok(())
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `generation.max_tokens` and `generation.timeout_seconds` must be positive
    /// - `generation.temperature` must be within 0.0..=2.0
    /// - `generation.command` must not be empty
    /// - `extraction.title_min_len` must not exceed `extraction.title_max_len`
    /// - `extraction.title_max_len`, `extraction.description_max_len` and
    ///   `extraction.list_min_items` must be positive
    pub fn validate(&self) -> Result<()> {
        let generation = &self.generation;
        if generation.max_tokens == 0 {
            return Err(invalid("generation.max_tokens must be greater than 0"));
        }
        if generation.timeout_seconds == 0 {
            return Err(invalid("generation.timeout_seconds must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(ProdgenError::ConfigError(format!(
                "config validation failed: generation.temperature must be between 0.0 and 2.0 (found {})",
                generation.temperature
            )));
        }
        if generation.command.trim().is_empty() {
            return Err(invalid("generation.command must not be empty"));
        }

        let extraction = &self.extraction;
        if extraction.title_max_len == 0 {
            return Err(invalid("extraction.title_max_len must be greater than 0"));
        }
        if extraction.title_min_len > extraction.title_max_len {
            return Err(ProdgenError::ConfigError(format!(
                "config validation failed: extraction.title_min_len ({}) exceeds extraction.title_max_len ({})",
                extraction.title_min_len, extraction.title_max_len
            )));
        }
        if extraction.description_max_len == 0 {
            return Err(invalid("extraction.description_max_len must be greater than 0"));
        }
        if extraction.list_min_items == 0 {
            return Err(invalid("extraction.list_min_items must be greater than 0"));
        }

        Ok(())
    }
}

fn invalid(rule: &str) -> ProdgenError {
    ProdgenError::ConfigError(format!("config validation failed: {}", rule))
}
