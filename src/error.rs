//! Error types for prodgen.
//!
//! Only the outer layers (config, generation backend, CLI) produce errors.
//! The extraction core never fails: it returns best-effort, possibly empty,
//! results instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prodgen operations.
#[derive(Error, Debug)]
pub enum ProdgenError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or holds invalid values.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The generation backend failed to produce a response.
    #[error("Generation failed: {0}")]
    GenerationError(String),
}

impl ProdgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProdgenError::UserError(_) => exit_codes::USER_ERROR,
            ProdgenError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            ProdgenError::GenerationError(_) => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Result type alias for prodgen operations.
pub type Result<T> = std::result::Result<T, ProdgenError>;
