//! Minification of rendered pages and feeds.
//!
//! Controlled by `[build] minify`; when disabled the input is returned untouched.

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Rendered output kinds that can be minified.
pub enum Markup<'a> {
    /// A full HTML document
    Html(&'a str),
    /// RSS feed or sitemap
    Xml(&'a str),
}

/// Minify `content` when `enabled`, borrowing the input otherwise.
pub fn minify(content: Markup<'_>, enabled: bool) -> Cow<'_, [u8]> {
    match (content, enabled) {
        (Markup::Html(html), false) | (Markup::Xml(html), false) => Cow::Borrowed(html.as_bytes()),
        (Markup::Html(html), true) => Cow::Owned(minify_html_document(html)),
        (Markup::Xml(xml), true) => Cow::Owned(minify_xml_document(xml)),
    }
}

fn minify_html_document(html: &str) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    minify_html::minify(html.as_bytes(), &cfg)
}

/// Drop whitespace between tags. Text nodes keep their line breaks.
fn minify_xml_document(xml: &str) -> Vec<u8> {
    static RE_INTER_TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r">\s+<").expect("static regex is valid"));

    RE_INTER_TAG
        .replace_all(xml.trim(), "><")
        .into_owned()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_disabled_borrows() {
        let html = "<html>\n  <body>\n  </body>\n</html>";
        let result = minify(Markup::Html(html), false);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html.as_bytes());
    }

    #[test]
    fn test_minify_html_strips_whitespace() {
        let html = "<html>\n  <head>\n  </head>\n  <body>\n    <p>Post not found</p>\n  </body>\n</html>";
        let result = minify(Markup::Html(html), true);
        let result = String::from_utf8_lossy(&result);

        assert!(!result.contains("\n  "));
        assert!(result.contains("<p>Post not found</p>"));
    }

    #[test]
    fn test_minify_html_keeps_test_ids() {
        let html = r#"<article data-testid="post-entry"><h3 data-testid="post-title">A</h3></article>"#;
        let result = minify(Markup::Html(html), true);
        let result = String::from_utf8_lossy(&result);

        assert!(result.contains("post-entry"));
        assert!(result.contains("post-title"));
    }

    #[test]
    fn test_minify_xml() {
        let xml = "<?xml version=\"1.0\"?>\n<urlset>\n\n  <url>\n    <loc>https://example.com/</loc>\n  </url>\n</urlset>";
        let result = minify(Markup::Xml(xml), true);

        assert_eq!(
            &*result,
            b"<?xml version=\"1.0\"?><urlset><url><loc>https://example.com/</loc></url></urlset>"
        );
    }

    #[test]
    fn test_minify_xml_keeps_multiline_text() {
        let xml = "<item>\n  <description>Data hygiene\nand reconciliation</description>\n</item>";
        let result = minify(Markup::Xml(xml), true);

        assert_eq!(
            &*result,
            b"<item><description>Data hygiene\nand reconciliation</description></item>"
        );
    }
}
