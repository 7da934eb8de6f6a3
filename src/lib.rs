//! Prodgen: product content prompts and best-effort response extraction.
//!
//! The core is [`extract`]: pure functions that turn loosely formatted
//! generated text into structured fields, falling back through markers,
//! sections, embedded JSON and heuristics instead of failing. Around it sit
//! [`prompt`] (prompt construction), [`generator`] (the backend seam),
//! [`service`] (prompt, backend, extraction) and the CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod extract;
pub mod generator;
pub mod product;
pub mod prompt;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
