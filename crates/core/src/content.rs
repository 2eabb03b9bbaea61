use crate::locator::Locator;
use crate::parse::{Document, Element};

/// Separator placed between paragraphs of the resolved body.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Article body containers in priority order.
pub fn container_tiers() -> Vec<Locator> {
    vec![
        Locator::tag("article"),
        Locator::attr("role", "article"),
        Locator::class("post-content"),
        Locator::class("article-content"),
        Locator::class("entry-content"),
        Locator::class("content"),
        Locator::class("post-body"),
        Locator::class("article-body"),
        Locator::tag("main"),
        Locator::class("main-content"),
    ]
}

/// Paragraph length limits for body resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphThresholds {
    /// Paragraphs inside a known container must be longer than this.
    pub container: usize,
    /// Paragraphs found by the whole-document fallback must be longer than this.
    pub fallback: usize,
}

impl Default for ParagraphThresholds {
    fn default() -> Self {
        Self { container: 20, fallback: 50 }
    }
}

/// Resolve the article body from a noise-free view with default settings.
pub fn resolve_content(doc: &Document) -> Option<String> {
    resolve_content_with(doc, &container_tiers(), ParagraphThresholds::default())
}

/// Resolve the article body from a noise-free view.
///
/// The first container tier holding at least one qualifying paragraph wins;
/// later tiers are not consulted. If none does, every paragraph in the
/// document is considered against the stricter fallback threshold.
/// Paragraphs are joined with a blank line.
pub fn resolve_content_with(doc: &Document, containers: &[Locator], limits: ParagraphThresholds) -> Option<String> {
    for (tier, locator) in containers.iter().enumerate() {
        let Some(container) = locator.first(doc) else {
            continue;
        };

        let paragraphs = qualifying_paragraphs(&container.select("p").unwrap_or_default(), limits.container);
        if !paragraphs.is_empty() {
            tracing::debug!(tier, locator = %locator, paragraphs = paragraphs.len(), "content container resolved");
            return Some(paragraphs.join(PARAGRAPH_SEPARATOR));
        }
    }

    let paragraphs = qualifying_paragraphs(&doc.select("p").unwrap_or_default(), limits.fallback);
    if paragraphs.is_empty() {
        tracing::debug!("no qualifying paragraphs");
        return None;
    }

    tracing::debug!(paragraphs = paragraphs.len(), "content resolved by document-wide fallback");
    Some(paragraphs.join(PARAGRAPH_SEPARATOR))
}

fn qualifying_paragraphs(elements: &[Element<'_>], min_chars: usize) -> Vec<String> {
    elements
        .iter()
        .filter_map(|p| {
            let text = p.text();
            let text = text.trim();
            if text.chars().count() > min_chars { Some(text.to_string()) } else { None }
        })
        .collect()
}
