//! Document shell shared by every page: `<head>`, header, and footer.

use crate::config::SiteConfig;
use chrono::Datelike;
use quick_xml::escape::escape;

/// Stylesheet shipped with the binary and written to `/style.css`.
pub const STYLESHEET: &str = include_str!("../embed/style.css");

/// Site-relative path of the stylesheet.
pub const STYLESHEET_PATH: &str = "/style.css";

/// Wraps page content in the full document.
pub struct Layout<'a> {
    config: &'a SiteConfig,
    title: String,
}

impl<'a> Layout<'a> {
    /// Layout titled `{page_title} | {site title}`, or just the site title.
    pub fn new(config: &'a SiteConfig, page_title: Option<&str>) -> Self {
        let title = match page_title {
            Some(page) => format!("{page} | {}", config.base.title),
            None => config.base.title.clone(),
        };
        Self { config, title }
    }

    pub fn render(&self, main: &str) -> String {
        let base = &self.config.base;
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="stylesheet" href="{STYLESHEET_PATH}">
</head>
<body>
<header class="site-header">
  <a class="logo" href="/" aria-label="{logo} logo" data-testid="logo">{logo}</a>
  <a class="cta" href="{cta_url}" target="_blank" rel="noreferrer" data-testid="header-cta">{cta_label}</a>
</header>
{main}
<footer class="site-footer">
  <div class="business">{business}</div>
  <div data-testid="footer-tag">&copy;{year} {legal_name}</div>
</footer>
</body>
</html>
"#,
            lang = escape(base.language.as_str()),
            title = escape(self.title.as_str()),
            description = escape(base.description.as_str()),
            logo = escape(base.logo.as_str()),
            cta_url = escape(base.cta_url.as_str()),
            cta_label = escape(base.cta_label.as_str()),
            business = escape(base.business.as_str()),
            legal_name = escape(base.legal_name.as_str()),
            year = chrono::Local::now().year(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shell() {
        let config = SiteConfig::default();
        let html = Layout::new(&config, None).render("<main>body</main>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en-US">"#));
        assert!(html.contains("<title>PMC Consulting</title>"));
        assert!(html.contains(r#"data-testid="logo">PMC</a>"#));
        assert!(html.contains(r#"href="https://calendly.com/pmc-consult/intro""#));
        assert!(html.contains("Schedule a Consult"));
        assert!(html.contains("Patrick McElroy Consulting LLC."));
        assert!(html.contains("<main>body</main>"));
    }

    #[test]
    fn test_layout_page_title() {
        let config = SiteConfig::default();
        let html = Layout::new(&config, Some("Post not found")).render("");

        assert!(html.contains("<title>Post not found | PMC Consulting</title>"));
    }

    #[test]
    fn test_layout_escapes_config_values() {
        let mut config = SiteConfig::default();
        config.base.title = "R&D <Ops>".into();
        let html = Layout::new(&config, None).render("");

        assert!(html.contains("<title>R&amp;D &lt;Ops&gt;</title>"));
    }
}
