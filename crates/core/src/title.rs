use crate::locator::{Locator, Tier, first_hit};
use crate::parse::Document;

/// Headline candidates in priority order.
///
/// Semantic headline classes beat generic headings, and headings beat the
/// `<title>` element, which usually carries a site-name suffix.
pub fn title_tiers() -> Vec<Tier> {
    vec![
        Tier::text(Locator::tag("article").within(Locator::tag("h1"))),
        Tier::text(Locator::class("post-title")),
        Tier::text(Locator::class("article-title")),
        Tier::text(Locator::class("entry-title")),
        Tier::text(Locator::tag_class("h1", "title")),
        Tier::text(Locator::class("content").within(Locator::tag("h1"))),
        Tier::text(Locator::tag("main").within(Locator::tag("h1"))),
        Tier::text(Locator::tag("h1")),
        Tier::attr(Locator::meta("property", "og:title"), "content"),
        Tier::text(Locator::tag("title")),
    ]
}

/// Picks the best headline for the document, trimmed.
///
/// Returns `None` when no tier yields non-blank text.
pub fn resolve_title(doc: &Document) -> Option<String> {
    resolve_title_with(doc, &title_tiers())
}

/// Same as [`resolve_title`] over a caller-supplied tier table.
pub fn resolve_title_with(doc: &Document, tiers: &[Tier]) -> Option<String> {
    let (tier, title) = first_hit(tiers, doc)?;
    tracing::debug!(tier, locator = %tiers[tier].locator, "title resolved");
    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn title_of(html: &str) -> Option<String> {
        resolve_title(&Document::parse(html).unwrap())
    }

    #[rstest]
    #[case::article_heading(r#"<h1>Loose</h1><article><h1> In Article </h1></article>"#, "In Article")]
    #[case::post_title(r#"<h1>Loose</h1><div class="post-title">Post</div>"#, "Post")]
    #[case::article_title(r#"<h1>Loose</h1><span class="article-title">Article</span>"#, "Article")]
    #[case::entry_title(r#"<h1>Loose</h1><h2 class="entry-title">Entry</h2>"#, "Entry")]
    #[case::h1_title(r#"<h1>Loose</h1><h1 class="title">Titled</h1>"#, "Titled")]
    #[case::content_heading(r#"<h1>Loose</h1><div class="content"><h1>Content</h1></div>"#, "Content")]
    #[case::main_heading(r#"<h1>Loose</h1><main><h1>Main</h1></main>"#, "Main")]
    #[case::any_heading(r#"<div><h1>
        Anywhere
    </h1></div>"#, "Anywhere")]
    #[case::open_graph(r#"<head><meta property="og:title" content=" OG "><title>Doc</title></head>"#, "OG")]
    #[case::document_title(r#"<head><title> Doc | Site </title></head><p>x</p>"#, "Doc | Site")]
    fn test_title_tiers(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(title_of(html), Some(expected.to_string()));
    }

    #[test]
    fn test_main_heading_beats_later_tiers() {
        let html = r#"<main><h1>Main</h1></main><h1>Later</h1>
            <meta property="og:title" content="OG">"#;
        assert_eq!(title_of(html), Some("Main".to_string()));
    }

    #[test]
    fn test_article_heading_beats_semantic_class() {
        let html = r#"<div class="post-title">Post</div><article><h1>Article</h1></article>"#;
        assert_eq!(title_of(html), Some("Article".to_string()));
    }

    #[test]
    fn test_blank_candidate_falls_through() {
        let html = r#"<article><h1>   </h1></article><div class="post-title">Real</div>"#;
        assert_eq!(title_of(html), Some("Real".to_string()));
    }

    #[test]
    fn test_no_title() {
        assert_eq!(title_of("<div><p>No headings here</p></div>"), None);
    }

    #[test]
    fn test_idempotent() {
        let doc = Document::parse(r#"<article><h1>Same</h1></article>"#).unwrap();
        assert_eq!(resolve_title(&doc), resolve_title(&doc));
    }
}
