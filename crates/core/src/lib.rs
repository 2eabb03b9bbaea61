//! Recover the title, publication date and body text of arbitrary web
//! articles, without site-specific configuration.
//!
//! ```rust
//! use lede_core::extract_html;
//!
//! let html = r#"<article><h1>Storm Warning</h1>
//!     <p>Paragraph one, long enough to count as real content for sure.</p>
//!     <p>Paragraph two, also sufficiently long to pass the extraction bar.</p>
//! </article>"#;
//!
//! let article = extract_html(html).unwrap();
//! assert_eq!(article.title.as_deref(), Some("Storm Warning"));
//! assert!(article.date.is_none());
//! ```

pub mod article;
pub mod config;
pub mod content;
pub mod date;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod locator;
pub mod parse;
pub mod preprocess;
pub mod title;

pub use article::{OutputFormat, ParsedArticle};
pub use config::{ExtractConfig, ExtractConfigBuilder, Settings};
pub use content::{ParagraphThresholds, resolve_content};
pub use date::{DateLocale, format_date, format_date_in, looks_like_date, parse_date, resolve_date};
pub use error::{ErrorCode, LedeError, Result};
pub use extract::{Extractor, Stage, extract_html, parse_article};
#[cfg(feature = "fetch")]
pub use extract::{fetch_and_extract, fetch_and_extract_with_config};
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, validate_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use locator::{Locator, Pick, Tier};
pub use parse::{Document, Element};
pub use preprocess::{default_noise, strip_noise};
pub use title::resolve_title;
