//! Mapping request paths to pages.

use crate::content::BLOG_PREFIX;
use std::borrow::Cow;

/// What a request path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/` or `/index.html`
    Home,
    /// `/blog/{segment}`; the segment may be empty or not a valid identifier.
    Post(Cow<'a, str>),
    /// Anything else, relative to the output directory without leading `/`.
    File(Cow<'a, str>),
}

impl<'a> Route<'a> {
    /// Classify a raw request URL.
    ///
    /// The query string and fragment are dropped, percent-encoding is decoded,
    /// and one trailing `/` is accepted.
    pub fn parse(url: &'a str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or_default();

        if matches!(path, "" | "/" | "/index.html") {
            return Self::Home;
        }

        if path == BLOG_PREFIX {
            return Self::Post(Cow::Borrowed(""));
        }

        if let Some(rest) = path
            .strip_prefix(BLOG_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            let rest = rest.strip_suffix("/index.html").unwrap_or(rest);
            let segment = rest.strip_suffix('/').unwrap_or(rest);
            return Self::Post(decode(segment));
        }

        Self::File(decode(path.trim_matches('/')))
    }
}

/// Percent-decode, keeping the raw text when it is not valid UTF-8 once decoded.
fn decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(segment: &str) -> Route<'_> {
        Route::Post(Cow::Borrowed(segment))
    }

    fn file(path: &str) -> Route<'_> {
        Route::File(Cow::Borrowed(path))
    }

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/index.html"), Route::Home);
        assert_eq!(Route::parse("/?utm_source=x"), Route::Home);
    }

    #[test]
    fn test_parse_post() {
        assert_eq!(
            Route::parse("/blog/zapier-vs-retool-for-logistics-workflows"),
            post("zapier-vs-retool-for-logistics-workflows")
        );
        assert_eq!(Route::parse("/blog/unknown-post/"), post("unknown-post"));
        assert_eq!(Route::parse("/blog/a-b/index.html"), post("a-b"));
        assert_eq!(Route::parse("/blog/a-b?ref=home#top"), post("a-b"));
    }

    #[test]
    fn test_parse_post_absent_segment() {
        assert_eq!(Route::parse("/blog"), post(""));
        assert_eq!(Route::parse("/blog/"), post(""));
    }

    #[test]
    fn test_parse_post_decodes() {
        assert_eq!(Route::parse("/blog/caf%C3%A9"), post("café"));
        assert_eq!(Route::parse("/blog/a%20b"), post("a b"));
    }

    #[test]
    fn test_parse_post_nested_segment_kept_whole() {
        assert_eq!(Route::parse("/blog/a/b"), post("a/b"));
    }

    #[test]
    fn test_parse_file() {
        assert_eq!(Route::parse("/style.css"), file("style.css"));
        assert_eq!(Route::parse("/feed.xml?t=1"), file("feed.xml"));
        assert_eq!(Route::parse("/blogroll/"), file("blogroll"));
    }

    #[test]
    fn test_parse_file_decodes() {
        assert_eq!(Route::parse("/my%20logo.svg"), file("my logo.svg"));
        assert_eq!(Route::parse("/img/caf%C3%A9.png"), file("img/café.png"));
        assert_eq!(Route::parse("/%2E%2E/secret.txt"), file("../secret.txt"));
    }
}
