//! Per-post fragments shared by the listing and the detail page.
//!
//! Both pages format dates and tags through these functions so the two views
//! can never drift apart.

use crate::{
    content::PostRecord,
    utils::date::{display_date, iso_date},
};
use quick_xml::escape::escape;
use std::fmt::Write;

/// `<time>` element with the display date and an ISO `datetime` attribute.
pub fn date_html(post: &PostRecord) -> String {
    format!(
        r#"<time class="post-date" data-testid="post-date" datetime="{}">{}</time>"#,
        iso_date(post.date),
        display_date(post.date)
    )
}

/// Tag list in record order; empty string when the post has no tags.
pub fn tags_html(post: &PostRecord) -> String {
    if post.tags.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<ul class="tags">"#);
    for tag in &post.tags {
        let _ = write!(
            html,
            r#"<li class="tag" data-testid="post-tag">{}</li>"#,
            escape(tag.as_str())
        );
    }
    html.push_str("</ul>");
    html
}

/// Escaped title text.
pub fn title_text(post: &PostRecord) -> String {
    escape(post.title.as_str()).into_owned()
}

/// Escaped excerpt text.
pub fn excerpt_text(post: &PostRecord) -> String {
    escape(post.excerpt.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(tags: &[&str]) -> PostRecord {
        PostRecord::new(
            "Dashboards & <Insight>",
            NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            tags.iter().copied(),
            "Sheets \"to\" KPIs",
        )
    }

    #[test]
    fn test_date_html() {
        let html = date_html(&post(&[]));

        assert!(html.contains(r#"datetime="2025-07-05""#));
        assert!(html.contains(">Jul 05, 2025</time>"));
        assert!(html.contains(r#"data-testid="post-date""#));
    }

    #[test]
    fn test_tags_html_in_order() {
        let html = tags_html(&post(&["Dashboards", "Sheets", "KPI"]));

        assert_eq!(html.matches(r#"data-testid="post-tag""#).count(), 3);
        let dashboards = html.find("Dashboards").unwrap();
        let kpi = html.find("KPI").unwrap();
        assert!(dashboards < kpi);
    }

    #[test]
    fn test_tags_html_escapes() {
        let html = tags_html(&post(&["A&B"]));
        assert!(html.contains("A&amp;B"));
    }

    #[test]
    fn test_tags_html_empty() {
        assert_eq!(tags_html(&post(&[])), "");
    }

    #[test]
    fn test_text_escaping() {
        let post = post(&[]);

        assert_eq!(title_text(&post), "Dashboards &amp; &lt;Insight&gt;");
        assert_eq!(excerpt_text(&post), "Sheets &quot;to&quot; KPIs");
    }
}
