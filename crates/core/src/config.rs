//! Extraction settings.
//!
//! Every heuristic constant used by the resolvers lives in [`ExtractConfig`].
//! [`Settings`] bundles it with the [`FetchConfig`] and can be read from a
//! TOML file:
//!
//! ```toml
//! [extract]
//! min_content_chars = 200
//! date_class_hints = ["date"]
//! date_locale = "en"
//!
//! [fetch]
//! timeout = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::ParagraphThresholds;
use crate::date::{DateLocale, DateTier, date_tiers};
use crate::fetch::FetchConfig;
use crate::{LedeError, Result};

/// Configuration for the extraction pass.
///
/// # Example
///
/// ```rust
/// use lede_core::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .min_content_chars(250)
///     .fallback_paragraph_chars(80)
///     .build();
/// assert_eq!(config.container_paragraph_chars, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Minimum trimmed body length for a successful extraction (default: 100).
    pub min_content_chars: usize,

    /// Paragraphs inside a known container must exceed this length (default: 20).
    pub container_paragraph_chars: usize,

    /// Paragraphs found by the document-wide fallback must exceed this length (default: 50).
    pub fallback_paragraph_chars: usize,

    /// Class-name substrings that mark free-text date candidates (default: `["date", "time"]`).
    pub date_class_hints: Vec<String>,

    /// Language of rendered dates (default: `ru`).
    pub date_locale: DateLocale,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 100,
            container_paragraph_chars: 20,
            fallback_paragraph_chars: 50,
            date_class_hints: vec!["date".to_string(), "time".to_string()],
            date_locale: DateLocale::default(),
        }
    }
}

impl ExtractConfig {
    /// Creates a new builder for ExtractConfig.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }

    pub fn paragraph_thresholds(&self) -> ParagraphThresholds {
        ParagraphThresholds { container: self.container_paragraph_chars, fallback: self.fallback_paragraph_chars }
    }

    pub fn date_tiers(&self) -> Vec<DateTier> {
        date_tiers(self.date_class_hints.as_slice())
    }
}

/// Builder for ExtractConfig.
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Sets the minimum body length.
    pub fn min_content_chars(mut self, value: usize) -> Self {
        self.config.min_content_chars = value;
        self
    }

    /// Sets the in-container paragraph threshold.
    pub fn container_paragraph_chars(mut self, value: usize) -> Self {
        self.config.container_paragraph_chars = value;
        self
    }

    /// Sets the fallback paragraph threshold.
    pub fn fallback_paragraph_chars(mut self, value: usize) -> Self {
        self.config.fallback_paragraph_chars = value;
        self
    }

    /// Replaces the date class-name substrings.
    pub fn date_class_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.date_class_hints = hints.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the date rendering locale.
    pub fn date_locale(mut self, value: DateLocale) -> Self {
        self.config.date_locale = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ExtractConfig {
        self.config
    }
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File-backed settings: `[extract]` and `[fetch]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub extract: ExtractConfig,
    pub fetch: FetchConfig,
}

impl Settings {
    /// `<config_dir>/lede/config.toml`, when the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lede").join("config.toml"))
    }

    /// Parses settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LedeError::Config(e.to_string()))
    }

    /// Reads settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LedeError::FileNotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| LedeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Reads `explicit` if given; otherwise the default location if it
    /// exists; otherwise built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading settings");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
