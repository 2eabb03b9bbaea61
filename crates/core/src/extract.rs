//! Article extraction pipeline.
//!
//! [`Extractor`] runs one document through `Fetching → Parsing → Validating`
//! and returns either a [`ParsedArticle`] or a classified [`LedeError`].
//! There are no retries here; [`LedeError::is_retryable`] tells callers
//! whether trying again could help.
//!
//! # Example
//!
//! ```rust
//! use lede_core::Extractor;
//!
//! let html = r#"<article>
//!     <h1>Storm Warning</h1>
//!     <time datetime="2024-03-01">Mar 1</time>
//!     <p>Paragraph one, long enough to count as real content for sure.</p>
//!     <p>Paragraph two, also sufficiently long to pass the extraction bar.</p>
//! </article>"#;
//!
//! let article = Extractor::new().extract_html(html).unwrap();
//! assert_eq!(article.title.as_deref(), Some("Storm Warning"));
//! assert_eq!(article.date.as_deref(), Some("1 марта 2024 г."));
//! ```

use std::fmt;

use crate::article::ParsedArticle;
use crate::config::ExtractConfig;
use crate::content::{container_tiers, resolve_content_with};
use crate::date::resolve_date_with;
use crate::locator::Locator;
use crate::parse::Document;
use crate::preprocess::default_noise;
use crate::title::resolve_title;
use crate::{LedeError, Result};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};

/// Pipeline stage, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Parsing,
    Validating,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetching => f.write_str("fetching"),
            Stage::Parsing => f.write_str("parsing"),
            Stage::Validating => f.write_str("validating"),
        }
    }
}

/// Main entry point for article extraction.
///
/// Holds only configuration, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractConfig,
    noise: Vec<Locator>,
}

impl Extractor {
    /// Creates an extractor with default settings.
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    /// Creates an extractor with custom settings.
    ///
    /// ```rust
    /// use lede_core::{ExtractConfig, Extractor};
    ///
    /// let config = ExtractConfig::builder().min_content_chars(20).build();
    /// let extractor = Extractor::with_config(config);
    /// let html = "<article><p>A short but complete note.</p></article>";
    /// assert!(extractor.extract_html(html).is_ok());
    /// ```
    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config, noise: default_noise() }
    }

    /// Replaces the set of elements stripped before body resolution.
    pub fn with_noise(mut self, noise: Vec<Locator>) -> Self {
        self.noise = noise;
        self
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Resolves title, date, and body without validating the result.
    ///
    /// Any combination of fields may be `None`.
    ///
    /// # Errors
    ///
    /// Returns [`LedeError::InvalidInput`] for empty HTML.
    pub fn parse_article(&self, html: &str) -> Result<ParsedArticle> {
        tracing::debug!(stage = %Stage::Parsing, bytes = html.len(), "resolving fields");

        let doc = Document::parse(html)?;
        let title = resolve_title(&doc);
        let date = resolve_date_with(&doc, &self.config.date_tiers(), self.config.date_locale);

        let clean = doc.without_noise(&self.noise);
        let content = resolve_content_with(&clean, &container_tiers(), self.config.paragraph_thresholds());

        Ok(ParsedArticle { date, title, content })
    }

    /// Extracts an article from raw HTML.
    ///
    /// # Errors
    ///
    /// Everything [`Extractor::parse_article`] returns, plus
    /// [`LedeError::EmptyContent`] when the body is missing or shorter than
    /// `min_content_chars` once trimmed.
    pub fn extract_html(&self, html: &str) -> Result<ParsedArticle> {
        let article = self.parse_article(html)?;
        self.validate(article)
    }

    /// Accepts `article` only if its body meets the minimum length.
    pub fn validate(&self, article: ParsedArticle) -> Result<ParsedArticle> {
        let length = article.content_len();
        let minimum = self.config.min_content_chars;
        tracing::debug!(stage = %Stage::Validating, length, minimum, "checking body length");

        if article.content.is_none() || length < minimum {
            tracing::warn!(length, minimum, "extracted body too short");
            return Err(LedeError::EmptyContent { length, minimum });
        }

        tracing::info!(length, "article extracted");
        Ok(article)
    }

    /// Fetches `url` and extracts its article.
    ///
    /// Parsing runs on the blocking pool. Dropping the returned future
    /// aborts an in-flight fetch. A page that loads with a blank body is
    /// [`LedeError::EmptyContent`], not invalid input.
    #[cfg(feature = "fetch")]
    #[tracing::instrument(skip(self, fetch_config))]
    pub async fn fetch_and_extract(&self, url: &str, fetch_config: &FetchConfig) -> Result<ParsedArticle> {
        tracing::debug!(stage = %Stage::Fetching, timeout = fetch_config.timeout, "requesting page");
        let html = fetch_url(url, fetch_config).await?;

        if html.trim().is_empty() {
            let minimum = self.config.min_content_chars;
            tracing::warn!(minimum, "fetched page has no markup");
            return Err(LedeError::EmptyContent { length: 0, minimum });
        }

        let extractor = self.clone();
        tokio::task::spawn_blocking(move || extractor.extract_html(&html))
            .await
            .map_err(|e| LedeError::InternalError(format!("extraction task failed: {}", e)))?
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts an article from raw HTML with default settings.
pub fn extract_html(html: &str) -> Result<ParsedArticle> {
    Extractor::new().extract_html(html)
}

/// Resolves fields from raw HTML with default settings and no validation.
pub fn parse_article(html: &str) -> Result<ParsedArticle> {
    Extractor::new().parse_article(html)
}

/// Fetches and extracts with default settings.
///
/// ```no_run
/// use lede_core::fetch_and_extract;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let article = fetch_and_extract("https://example.com/news/1").await?;
///     println!("{:?}", article.title);
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn fetch_and_extract(url: &str) -> Result<ParsedArticle> {
    Extractor::new().fetch_and_extract(url, &FetchConfig::default()).await
}

/// Fetches and extracts with custom fetch settings.
#[cfg(feature = "fetch")]
pub async fn fetch_and_extract_with_config(url: &str, fetch_config: &FetchConfig) -> Result<ParsedArticle> {
    Extractor::new().fetch_and_extract(url, fetch_config).await
}
