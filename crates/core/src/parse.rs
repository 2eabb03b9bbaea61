//! HTML parsing and element lookup.
//!
//! This module provides the [`Document`] and [`Element`] types, thin
//! wrappers over `scraper` that the resolvers query with CSS selectors.
//!
//! A document is parsed once. Title and date resolution read that original
//! view; content resolution reads a second, noise-free view derived with
//! [`Document::without_noise`], so stripping navigation or headers can never
//! hide a title or date signal.
//!
//! # Example
//!
//! ```rust
//! use lede_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <nav><p>Menu</p></nav>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.select("p").unwrap().len(), 2);
//! ```

use scraper::{Html, Selector};

use crate::locator::Locator;
use crate::preprocess::strip_noise;
use crate::{LedeError, Result};

/// Represents a parsed HTML document.
#[derive(Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Malformed markup is repaired by the HTML5 parsing algorithm, so this
    /// only fails on empty input.
    ///
    /// # Errors
    ///
    /// Returns [`LedeError::InvalidInput`] if `html` is empty or whitespace.
    pub fn parse(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(LedeError::InvalidInput("missing HTML".to_string()));
        }

        Ok(Self { html: Html::parse_document(html) })
    }

    /// Derives the noise-free view used for body extraction.
    ///
    /// The parsed tree is cloned and every element matched by one of `noise`
    /// is detached together with its subtree, so both views share the same
    /// HTML5 tree construction. `self` is left untouched.
    pub fn without_noise(&self, noise: &[Locator]) -> Document {
        let mut html = self.html.clone();
        strip_noise(&mut html, noise);
        Self { html }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LedeError::InternalError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lede_core::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element in document order matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LedeError::InternalError`] if the selector is invalid.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use lede_core::Document;
///
/// let html = r#"<time datetime="2024-03-01">March 1</time>"#;
/// let doc = Document::parse(html).unwrap();
/// let time = &doc.select("time").unwrap()[0];
///
/// assert_eq!(time.text(), "March 1");
/// assert_eq!(time.attr("datetime"), Some("2024-03-01"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LedeError::InternalError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| LedeError::InternalError(format!("Invalid selector {}: {}", selector, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <header><h1>Site Heading</h1></header>
            <p class="content">Paragraph 1</p>
            <p class="content">Paragraph 2</p>
            <footer><time datetime="2024-01-01">Jan 1</time></footer>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.select_first("title").unwrap().unwrap().text(), "Test Page");
    }

    #[test]
    fn test_parse_empty_is_invalid_input() {
        assert!(matches!(Document::parse("   \n"), Err(LedeError::InvalidInput(_))));
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].text(), "Paragraph 2");
    }

    #[test]
    fn test_select_first() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let first = doc.select_first("p.content").unwrap().unwrap();
        assert_eq!(first.text(), "Paragraph 1");
        assert!(doc.select_first("article").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(LedeError::InternalError(_))));
    }

    #[test]
    fn test_without_noise_leaves_original_intact() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let clean = doc.without_noise(&[Locator::tag("header"), Locator::tag("footer")]);

        assert!(clean.select_first("h1").unwrap().is_none());
        assert!(clean.select_first("time").unwrap().is_none());
        assert_eq!(clean.select("p.content").unwrap().len(), 2);

        assert!(doc.select_first("h1").unwrap().is_some());
        assert!(doc.select_first("time").unwrap().is_some());
    }

    #[test]
    fn test_without_noise_follows_parsed_tree() {
        let html = "<article><p>Lead sentence.<aside>Aside words</aside> Orphaned tail.</p><p>Second.</p></article>";
        let doc = Document::parse(html).unwrap();
        let clean = doc.without_noise(&[Locator::tag("aside")]);

        let paragraphs: Vec<String> = clean.select("p").unwrap().iter().map(Element::text).collect();
        assert_eq!(paragraphs[0], "Lead sentence.");
        assert!(paragraphs.iter().all(|p| !p.contains("Aside words")));
        assert!(!paragraphs[0].contains("Orphaned tail"));
    }

    #[test]
    fn test_without_noise_nested_matches() {
        let html = r#"<div class="sidebar"><nav><p>Menu</p></nav></div><p>Kept</p>"#;
        let doc = Document::parse(html).unwrap();
        let clean = doc.without_noise(&[Locator::class("sidebar"), Locator::tag("nav")]);

        let paragraphs = clean.select("p").unwrap();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text(), "Kept");
    }
}
