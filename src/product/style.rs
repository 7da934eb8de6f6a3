//! Writing and image style preferences.

use serde::{Deserialize, Serialize};

/// Requested content length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    /// Parse a content length from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Writing style preferences. Unset values fall back per prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub tone: Option<String>,
    pub length: Option<ContentLength>,
    pub audience: Option<String>,
    pub keywords: Vec<String>,
}

impl StyleOptions {
    /// Style with a tone set.
    pub fn with_tone(tone: impl Into<String>) -> Self {
        Self {
            tone: Some(tone.into()),
            ..Self::default()
        }
    }

    /// Set the length.
    pub fn length(mut self, length: ContentLength) -> Self {
        self.length = Some(length);
        self
    }

    /// The tone, or `default` when unset.
    pub fn tone_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.tone.as_deref().unwrap_or(default)
    }

    /// The audience, defaulting to general consumers.
    pub fn audience(&self) -> &str {
        self.audience.as_deref().unwrap_or("general consumers")
    }
}

/// Image generation preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStyle {
    pub style: Option<String>,
    pub angle: Option<String>,
    pub background: Option<String>,
}

impl ImageStyle {
    /// Photographic style, defaulting to realistic product photography.
    pub fn style(&self) -> &str {
        self.style
            .as_deref()
            .unwrap_or("realistic product photography")
    }

    /// Camera angle, defaulting to a front-facing shot.
    pub fn angle(&self) -> &str {
        self.angle.as_deref().unwrap_or("front-facing product shot")
    }

    /// Backdrop, defaulting to plain white.
    pub fn background(&self) -> &str {
        self.background.as_deref().unwrap_or("plain white background")
    }
}
