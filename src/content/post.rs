//! Post records.

use crate::utils::slug::identifier_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single blog post as listed on the home page and shown on its detail page.
///
/// Dates are written as quoted ISO strings in the posts file:
///
/// ```toml
/// [[posts]]
/// title = "Zapier vs Retool for Logistics Workflows"
/// date = "2025-07-22"
/// tags = ["Zapier", "Retool", "Integrations"]
/// excerpt = "Where each tool shines for ops teams."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostRecord {
    /// Display title, unique within a store.
    pub title: String,

    /// Publication date. Display only, never used for ordering.
    pub date: NaiveDate,

    /// Labels rendered verbatim, in order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text summary.
    pub excerpt: String,
}

impl PostRecord {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        tags: impl IntoIterator<Item = impl Into<String>>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            tags: tags.into_iter().map(Into::into).collect(),
            excerpt: excerpt.into(),
        }
    }

    /// URL identifier, recomputed from the title on every call.
    pub fn identifier(&self) -> String {
        identifier_of(&self.title)
    }
}

/// Path prefix under which detail pages are served.
pub const BLOG_PREFIX: &str = "/blog";
