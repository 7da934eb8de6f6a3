//! Generation backends.
//!
//! The content service only needs "text in, text out" and "prompt in, image
//! URL out". [`TextGenerator`] is that seam; [`CommandGenerator`] fills it by
//! running a configured external command.

mod command;

pub use command::CommandGenerator;

use crate::error::Result;

/// One completion request: a system role plus the user prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }
}

/// A backend that produces text and images.
pub trait TextGenerator {
    /// Complete `request`, returning the raw response text.
    fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Generate an image for `prompt`, returning its URL.
    fn generate_image(&self, prompt: &str) -> Result<String>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &G {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        (**self).complete(request)
    }

    fn generate_image(&self, prompt: &str) -> Result<String> {
        (**self).generate_image(prompt)
    }
}
