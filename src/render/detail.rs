//! Post detail page and its not-found fallback.

use super::format::{date_html, excerpt_text, tags_html, title_text};
use crate::content::{ContentStore, PostRecord, Resolution};

/// Title of the fallback page.
pub const NOT_FOUND_TITLE: &str = "Post not found";

const BACK_LINK: &str =
    r#"<a class="back-link" href="/" data-testid="back-link">&larr; Back to home</a>"#;

/// Resolve `segment` against `store` and render the page body for the outcome.
pub fn render_detail<'a>(store: &'a ContentStore, segment: &str) -> (Resolution<'a>, String) {
    let resolution = store.resolve(segment);
    let body = match resolution {
        Resolution::Found(post) => found_html(post),
        Resolution::NotFound => not_found_html(),
    };
    (resolution, body)
}

fn found_html(post: &PostRecord) -> String {
    format!(
        r#"<main class="post">
<article data-testid="post-detail">
{BACK_LINK}
<div>{date}</div>
<h1 data-testid="post-title">{title}</h1>
<p data-testid="post-excerpt">{excerpt}</p>
{tags}
</article>
</main>"#,
        date = date_html(post),
        title = title_text(post),
        excerpt = excerpt_text(post),
        tags = tags_html(post),
    )
}

fn not_found_html() -> String {
    format!(
        r#"<main class="post">
<article data-testid="post-not-found">
{BACK_LINK}
<h1>{NOT_FOUND_TITLE}</h1>
</article>
</main>"#
    )
}
