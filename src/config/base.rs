//! `[base]` section configuration.
//!
//! Site identity: title, owner, canonical URL, and the header/footer shell.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml - site metadata and page shell.
///
/// # Example
/// ```toml
/// [base]
/// title = "PMC Consulting"
/// url = "https://pmc-consult.com"
/// cta_url = "https://calendly.com/pmc-consult/intro"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Browser tab title of the home page, and RSS channel title.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Meta description and RSS channel description.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Base URL for absolute links in rss/sitemap.
    /// Required when rss or sitemap generation is enabled.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Author name for the rss feed.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author email for the rss feed.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Short business name shown in the footer.
    #[serde(default = "defaults::base::business")]
    #[educe(Default = defaults::base::business())]
    pub business: String,

    /// Legal entity name in the footer copyright line.
    #[serde(default = "defaults::base::legal_name")]
    #[educe(Default = defaults::base::legal_name())]
    pub legal_name: String,

    /// Wordmark rendered in the header.
    #[serde(default = "defaults::base::logo")]
    #[educe(Default = defaults::base::logo())]
    pub logo: String,

    /// Header call-to-action label.
    #[serde(default = "defaults::base::cta_label")]
    #[educe(Default = defaults::base::cta_label())]
    pub cta_label: String,

    /// Header call-to-action target (opens in a new tab).
    #[serde(default = "defaults::base::cta_url")]
    #[educe(Default = defaults::base::cta_url())]
    pub cta_url: String,
}

impl BaseConfig {
    /// Absolute URL for a site-relative `path`, if `url` is set.
    pub fn absolute_url(&self, path: &str) -> Option<String> {
        let base = self.url.as_deref()?.trim_end_matches('/');
        Some(format!("{base}{path}"))
    }
}
