//! RSS feed generation.
//!
//! One item per post, in store order, linking to the post's detail page.

use crate::{
    config::SiteConfig,
    content::ContentStore,
    log,
    render::{Summary, summaries},
    utils::{
        date::rfc2822_date,
        minify::{Markup, minify},
    },
};
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

/// Build the RSS feed if enabled in config.
pub fn build_rss(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::new(config, store).write()?;
    }
    Ok(())
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    store: &'a ContentStore,
}

impl<'a> RssFeed<'a> {
    const fn new(config: &'a SiteConfig, store: &'a ContentStore) -> Self {
        Self { config, store }
    }

    fn into_xml(self) -> Result<String> {
        let base = &self.config.base;
        let author = rss_author(self.config);
        let items: Vec<_> = summaries(self.store)
            .map(|summary| summary_to_item(&summary, self.config, &author))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&base.title)
            .link(base.url.as_deref().unwrap_or_default())
            .description(&base.description)
            .language(base.language.clone())
            .generator(format!("pmc-site {}", env!("CARGO_PKG_VERSION")))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    fn write(self) -> Result<()> {
        let minify_enabled = self.config.build.minify;
        let path = self.config.rss_path();
        let xml = self.into_xml()?;
        let xml = minify(Markup::Xml(&xml), minify_enabled);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &*xml)
            .with_context(|| format!("Failed to write rss feed to {}", path.display()))?;

        log!("rss"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Convert a listing summary into an RSS item.
fn summary_to_item(summary: &Summary<'_>, config: &SiteConfig, author: &str) -> rss::Item {
    let post = summary.post;
    let link = config
        .base
        .absolute_url(&format!("{}/", summary.href()))
        .unwrap_or_else(|| summary.href());
    let categories: Vec<_> = post
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.clone()).build())
        .collect();

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.excerpt.clone())
        .pub_date(rfc2822_date(post.date))
        .author(author.to_owned())
        .categories(categories)
        .build()
}

/// Site author in RSS form: `email@example.com (Name)`.
///
/// An author already written in that form is used as is.
fn rss_author(config: &SiteConfig) -> String {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(author) {
        author.clone()
    } else {
        format!("{} ({})", config.base.email, author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostRecord;
    use chrono::NaiveDate;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://pmc-consult.com".to_string());
        config.base.author = "Site Author".to_string();
        config.base.email = "site@example.com".to_string();
        config
    }

    fn single_post_store() -> ContentStore {
        ContentStore::new(vec![PostRecord::new(
            "Zapier vs Retool for Logistics Workflows",
            NaiveDate::from_ymd_opt(2025, 7, 22).unwrap(),
            ["Zapier", "Retool", "Integrations"],
            "Where each tool shines.",
        )])
    }

    #[test]
    fn test_rss_author() {
        let mut config = make_config();
        assert_eq!(rss_author(&config), "site@example.com (Site Author)");

        config.base.author = "pm@example.com (Patrick)".to_string();
        assert_eq!(rss_author(&config), "pm@example.com (Patrick)");
    }

    #[test]
    fn test_summary_to_item() {
        let config = make_config();
        let store = single_post_store();
        let summary = summaries(&store).next().unwrap();
        let item = summary_to_item(&summary, &config, "a@b.co (A)");

        assert_eq!(item.title(), Some("Zapier vs Retool for Logistics Workflows"));
        assert_eq!(
            item.link(),
            Some("https://pmc-consult.com/blog/zapier-vs-retool-for-logistics-workflows/")
        );
        assert_eq!(item.description(), Some("Where each tool shines."));
        assert_eq!(item.categories().len(), 3);
        assert!(item.pub_date().unwrap().contains("22 Jul 2025"));
    }

    #[test]
    fn test_into_xml_items_in_store_order() {
        let config = make_config();
        let store = ContentStore::builtin();
        let xml = RssFeed::new(&config, &store).into_xml().unwrap();

        assert_eq!(xml.matches("<item>").count(), 4);
        let first = xml.find("Case Study: Automating").unwrap();
        let last = xml.find("Wiring LSP Data").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_build_rss_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().to_path_buf();
        config.build.rss.enable = true;

        build_rss(&config, &single_post_store()).unwrap();

        let xml = fs::read_to_string(dir.path().join("feed.xml")).unwrap();
        assert!(xml.contains("zapier-vs-retool-for-logistics-workflows"));
    }

    #[test]
    fn test_build_rss_minified_keeps_multiline_excerpt() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().to_path_buf();
        config.build.rss.enable = true;
        config.build.minify = true;
        let store = ContentStore::new(vec![PostRecord::new(
            "Reconciling Carrier Invoices",
            NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
            ["Data"],
            "Data hygiene\nand reconciliation",
        )]);

        build_rss(&config, &store).unwrap();

        let xml = fs::read_to_string(dir.path().join("feed.xml")).unwrap();
        assert!(xml.contains("Data hygiene\nand reconciliation"));
        assert!(!xml.contains("hygieneand"));
        assert!(!xml.contains(">\n<"));
    }

    #[test]
    fn test_build_rss_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().to_path_buf();

        build_rss(&config, &single_post_store()).unwrap();

        assert!(!dir.path().join("feed.xml").exists());
    }
}
