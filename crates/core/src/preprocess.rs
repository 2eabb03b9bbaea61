use scraper::{Html, Selector};

use crate::locator::Locator;

/// Elements that are never part of an article body: scripts and styles,
/// page chrome, comment threads, ads, share widgets and related-post rails.
pub fn default_noise() -> Vec<Locator> {
    vec![
        Locator::tag("script"),
        Locator::tag("style"),
        Locator::tag("nav"),
        Locator::tag("header"),
        Locator::tag("footer"),
        Locator::tag("aside"),
        Locator::class("sidebar"),
        Locator::class("comments"),
        Locator::class("advertisement"),
        Locator::class("ad"),
        Locator::class("social-share"),
        Locator::class("related-posts"),
    ]
}

/// Detach every element matching one of `noise` from `html`, subtree included.
///
/// Matches are collected per locator before any node is detached, so nested
/// matches are safe. Locators that do not compile to a selector are skipped
/// with a warning rather than failing the whole pass.
pub fn strip_noise(html: &mut Html, noise: &[Locator]) {
    for locator in noise {
        let css = locator.to_css();
        let selector = match Selector::parse(&css) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!(selector = %css, error = %e, "noise selector skipped");
                continue;
            }
        };

        let matched: Vec<_> = html.select(&selector).map(|el| el.id()).collect();
        for id in matched {
            if let Some(mut node) = html.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped_text(source: &str, noise: &[Locator]) -> String {
        let mut html = Html::parse_document(source);
        strip_noise(&mut html, noise);
        html.root_element().text().collect()
    }

    #[test]
    fn test_strip_default_noise() {
        let html = r#"
            <html>
                <head><script>alert('test');</script><style>body{color:red;}</style></head>
                <body>
                    <header><h1>Site</h1></header>
                    <nav><a href="/">Home</a></nav>
                    <div class="sidebar">Sidebar text</div>
                    <div class="ad">Buy now</div>
                    <div class="social-share">Share</div>
                    <div class="post-content"><p>Body text</p></div>
                    <aside>Aside text</aside>
                    <section class="comments"><p>First!</p></section>
                    <div class="related-posts">More</div>
                    <footer>Copyright</footer>
                </body>
            </html>
        "#;

        let result = stripped_text(html, &default_noise());
        assert!(!result.contains("alert"), "Script content should be removed");
        assert!(!result.contains("color:red"), "Style content should be removed");
        assert!(!result.contains("Site"));
        assert!(!result.contains("Home"));
        assert!(!result.contains("Sidebar text"));
        assert!(!result.contains("Buy now"));
        assert!(!result.contains("Share"));
        assert!(!result.contains("Aside text"));
        assert!(!result.contains("First!"));
        assert!(!result.contains("More"));
        assert!(!result.contains("Copyright"));
        assert!(result.contains("Body text"));
    }

    #[test]
    fn test_class_token_not_substring() {
        let html = r#"<div class="header-ad-free"><p>Keep me</p></div><div class="bad"><p>Keep too</p></div>"#;
        let result = stripped_text(html, &default_noise());
        assert!(result.contains("Keep me"));
        assert!(result.contains("Keep too"));
    }

    #[test]
    fn test_no_noise_is_identity() {
        let source = "<p>Untouched</p><nav>Menu</nav>";
        let mut html = Html::parse_document(source);
        strip_noise(&mut html, &[]);
        assert_eq!(html.html(), Html::parse_document(source).html());
    }

    #[test]
    fn test_preserves_multibyte_text() {
        let html = "<nav>Меню</nav><p>Текст статьи — «цитата»</p>";
        let result = stripped_text(html, &default_noise());
        assert!(!result.contains("Меню"));
        assert!(result.contains("Текст статьи — «цитата»"));
    }
}
