//! Declarative element lookup strategies.
//!
//! Every resolver is driven by an ordered table of [`Tier`]s. A tier pairs a
//! [`Locator`] (where to look) with a [`Pick`] (what to read from the first
//! matching element). Locators are rendered to CSS selectors in one place so
//! the same strategies drive the resolvers and noise stripping.
//!
//! # Example
//!
//! ```rust
//! use lede_core::{Document, Locator, Tier};
//!
//! let doc = Document::parse(r#"<div class="entry-title"> Hello </div>"#).unwrap();
//! let tier = Tier::text(Locator::class("entry-title"));
//! assert_eq!(tier.resolve(&doc), Some("Hello".to_string()));
//! ```

use std::fmt;

use crate::parse::{Document, Element};

/// Where to look for a candidate element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Elements with the given tag name, e.g. `h1`.
    Tag(String),
    /// Elements carrying the exact class token, e.g. `post-title`.
    Class(String),
    /// Elements whose `class` attribute contains the substring.
    ClassContains(String),
    /// Elements (optionally restricted to a tag) with an attribute, and
    /// optionally an exact attribute value.
    Attr { tag: Option<String>, name: String, value: Option<String> },
    /// Elements with both the tag name and the class token, e.g. `h1.title`.
    TagClass { tag: String, class: String },
    /// `target` elements that are descendants of a `scope` element.
    Within { scope: Box<Locator>, target: Box<Locator> },
}

impl Locator {
    pub fn tag(name: &str) -> Self {
        Locator::Tag(name.to_string())
    }

    pub fn class(name: &str) -> Self {
        Locator::Class(name.to_string())
    }

    pub fn class_contains(fragment: &str) -> Self {
        Locator::ClassContains(fragment.to_string())
    }

    /// Any element with `name="value"`.
    pub fn attr(name: &str, value: &str) -> Self {
        Locator::Attr { tag: None, name: name.to_string(), value: Some(value.to_string()) }
    }

    /// `<tag>` elements that carry the attribute at all.
    pub fn tag_with_attr(tag: &str, name: &str) -> Self {
        Locator::Attr { tag: Some(tag.to_string()), name: name.to_string(), value: None }
    }

    /// `<meta>` tag addressed by its `property` or `name` attribute.
    pub fn meta(key_attr: &str, key: &str) -> Self {
        Locator::Attr { tag: Some("meta".to_string()), name: key_attr.to_string(), value: Some(key.to_string()) }
    }

    pub fn tag_class(tag: &str, class: &str) -> Self {
        Locator::TagClass { tag: tag.to_string(), class: class.to_string() }
    }

    /// Narrows `target` to descendants of `self`.
    pub fn within(self, target: Locator) -> Self {
        Locator::Within { scope: Box::new(self), target: Box::new(target) }
    }

    /// Renders the locator as a CSS selector.
    pub fn to_css(&self) -> String {
        match self {
            Locator::Tag(tag) => tag.clone(),
            Locator::Class(class) => class_selector(class),
            Locator::ClassContains(fragment) => format!("[class*=\"{}\"]", escape_value(fragment)),
            Locator::Attr { tag, name, value } => {
                let tag = tag.as_deref().unwrap_or("");
                match value {
                    Some(value) => format!("{}[{}=\"{}\"]", tag, name, escape_value(value)),
                    None => format!("{}[{}]", tag, name),
                }
            }
            Locator::TagClass { tag, class } => format!("{}{}", tag, class_selector(class)),
            Locator::Within { scope, target } => format!("{} {}", scope.to_css(), target.to_css()),
        }
    }

    /// First element in document order matching this locator.
    pub fn first<'a>(&self, doc: &'a Document) -> Option<Element<'a>> {
        let css = self.to_css();
        match doc.select_first(&css) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(selector = %css, error = %e, "skipping unusable locator");
                None
            }
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// What to read from a located element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// Concatenated descendant text.
    Text,
    /// Value of the named attribute.
    Attr(String),
}

/// One entry of an ordered candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub locator: Locator,
    pub pick: Pick,
}

impl Tier {
    pub fn text(locator: Locator) -> Self {
        Self { locator, pick: Pick::Text }
    }

    pub fn attr(locator: Locator, name: &str) -> Self {
        Self { locator, pick: Pick::Attr(name.to_string()) }
    }

    /// Reads the first matching element and returns its trimmed value.
    ///
    /// Only the first element in document order is consulted. Blank values
    /// count as no match.
    pub fn resolve(&self, doc: &Document) -> Option<String> {
        let element = self.locator.first(doc)?;
        let raw = match &self.pick {
            Pick::Text => element.text(),
            Pick::Attr(name) => element.attr(name)?.to_string(),
        };
        non_blank(&raw)
    }

    /// Reads the trimmed text of the first matching element, whatever the pick.
    pub fn resolve_text(&self, doc: &Document) -> Option<String> {
        non_blank(&self.locator.first(doc)?.text())
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Evaluates tiers in order and returns the first hit with its index.
pub fn first_hit(tiers: &[Tier], doc: &Document) -> Option<(usize, String)> {
    tiers
        .iter()
        .enumerate()
        .find_map(|(index, tier)| tier.resolve(doc).map(|value| (index, value)))
}

fn class_selector(class: &str) -> String {
    let plain = class.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && class.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if plain { format!(".{}", class) } else { format!("[class~=\"{}\"]", escape_value(class)) }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
