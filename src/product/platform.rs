//! Social platforms and the set of platforms requested for a campaign.

use crate::error::{ProdgenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A social network that posts can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
}

impl Platform {
    /// Every platform, in prompt order.
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::LinkedIn,
    ];

    /// Lowercase key, e.g. `linkedin`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
        }
    }

    /// Display spelling, e.g. `LinkedIn`.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Look up a platform by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ProdgenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            ProdgenError::UserError(format!(
                "unknown platform '{}' (expected one of: instagram, facebook, twitter, linkedin)",
                s.trim()
            ))
        })
    }
}

/// Platforms requested for generation, in request order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformSet {
    requested: Vec<Platform>,
}

impl PlatformSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instagram, Facebook and Twitter: the set used when completing a product.
    pub fn campaign_default() -> Self {
        [Platform::Instagram, Platform::Facebook, Platform::Twitter]
            .into_iter()
            .collect()
    }

    /// Build from `name -> requested` flags.
    ///
    /// Flags set to `false` are skipped. Unknown names are skipped with a
    /// warning.
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut set = Self::new();
        for (name, requested) in flags {
            if !requested {
                continue;
            }
            match Platform::from_name(name) {
                Some(platform) => set.insert(platform),
                None => warn!(platform = name, "ignoring unknown platform"),
            }
        }
        set
    }

    /// Parse a comma-separated list such as `instagram,facebook`.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(',')
            .filter(|name| !name.trim().is_empty())
            .map(Platform::from_str)
            .collect()
    }

    /// Add a platform unless already requested.
    pub fn insert(&mut self, platform: Platform) {
        if !self.requested.contains(&platform) {
            self.requested.push(platform);
        }
    }

    /// Whether `platform` was requested.
    pub fn contains(&self, platform: Platform) -> bool {
        self.requested.contains(&platform)
    }

    /// Requested platforms in request order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.requested.iter().copied()
    }

    /// Number of requested platforms.
    pub fn len(&self) -> usize {
        self.requested.len()
    }

    /// Whether nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }
}

impl FromIterator<Platform> for PlatformSet {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        let mut set = Self::new();
        for platform in iter {
            set.insert(platform);
        }
        set
    }
}
