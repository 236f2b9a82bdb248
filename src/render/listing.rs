//! Blog listing: one summary per post, in store order.

use super::format::{date_html, excerpt_text, tags_html, title_text};
use crate::content::{BLOG_PREFIX, ContentStore, PostRecord};
use crate::utils::slug::identifier_of;

/// Everything the listing shows for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<'a> {
    pub post: &'a PostRecord,
    /// Identifier computed for this render.
    pub identifier: String,
}

impl Summary<'_> {
    /// Link target of the detail page.
    pub fn href(&self) -> String {
        format!("{BLOG_PREFIX}/{}", self.identifier)
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<article class="card post-entry" data-testid="post-entry">
  {date}
  <h3 data-testid="post-title">{title}</h3>
  <p data-testid="post-excerpt">{excerpt}</p>
  {tags}
  <a class="read-more" href="{href}" data-testid="post-link">Read more &rarr;</a>
</article>"#,
            date = date_html(self.post),
            title = title_text(self.post),
            excerpt = excerpt_text(self.post),
            tags = tags_html(self.post),
            href = self.href(),
        )
    }
}

/// Lazily produce one summary per post, in store order.
///
/// Identifiers are recomputed on every call; nothing is cached.
pub fn summaries(store: &ContentStore) -> impl Iterator<Item = Summary<'_>> {
    store.posts().iter().map(|post| Summary {
        post,
        identifier: identifier_of(&post.title),
    })
}

/// The blog section of the home page.
pub fn render_listing(store: &ContentStore) -> String {
    let entries: Vec<String> = summaries(store).map(|summary| summary.to_html()).collect();

    format!(
        r#"<section class="blog" id="blog" data-testid="blog-list">
<h2>From the blog</h2>
<div class="grid">
{}
</div>
</section>"#,
        entries.join("\n")
    )
}
