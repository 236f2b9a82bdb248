//! Sitemap generation.
//!
//! Lists the home page and every post's detail page.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://pmc-consult.com/blog/zapier-vs-retool-for-logistics-workflows/</loc>
//!     <lastmod>2025-07-22</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    log,
    render::summaries,
    utils::{
        date::iso_date,
        minify::{Markup, minify},
    },
};
use anyhow::{Context, Result};
use quick_xml::escape::escape;
use std::{fmt::Write, fs};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if config.build.sitemap.enable {
        Sitemap::new(config, store).write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    /// `YYYY-MM-DD`
    lastmod: Option<String>,
}

impl Sitemap {
    fn new(config: &SiteConfig, store: &ContentStore) -> Self {
        let absolute = |path: &str| config.base.absolute_url(path).unwrap_or_else(|| path.to_owned());

        let home = UrlEntry {
            loc: absolute("/"),
            lastmod: None,
        };
        let posts = summaries(store).map(|summary| UrlEntry {
            loc: absolute(&format!("{}/", summary.href())),
            lastmod: Some(iso_date(summary.post.date)),
        });

        Self {
            urls: std::iter::once(home).chain(posts).collect(),
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        let _ = writeln!(xml, r#"<urlset xmlns="{SITEMAP_NS}">"#);

        for entry in self.urls {
            xml.push_str("  <url>\n");
            let _ = writeln!(xml, "    <loc>{}</loc>", escape(entry.loc.as_str()));
            if let Some(lastmod) = entry.lastmod {
                let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let path = config.sitemap_path();
        let xml = self.into_xml();
        let xml = minify(Markup::Xml(&xml), config.build.minify);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}
