//! Home page body: hero, services grid, and the blog listing.

use super::listing::render_listing;
use crate::{
    config::{HomeConfig, SiteConfig},
    content::ContentStore,
};
use quick_xml::escape::escape;

pub fn render_home_body(config: &SiteConfig, store: &ContentStore) -> String {
    format!(
        "<main>\n{}\n{}\n{}\n</main>",
        hero_html(config),
        services_html(&config.home),
        render_listing(store)
    )
}

fn hero_html(config: &SiteConfig) -> String {
    format!(
        r##"<section class="hero" data-testid="hero">
<h1>{headline}</h1>
<p>{tagline}</p>
<a class="cta" href="{cta_url}" target="_blank" rel="noreferrer" data-testid="hero-cta">{cta_label}</a>
<a class="next-section" href="#services">Services &darr;</a>
</section>"##,
        headline = escape(config.home.headline.as_str()),
        tagline = escape(config.home.tagline.as_str()),
        cta_url = escape(config.base.cta_url.as_str()),
        cta_label = escape(config.base.cta_label.as_str()),
    )
}

fn services_html(home: &HomeConfig) -> String {
    let cards: Vec<String> = home
        .services
        .iter()
        .map(|service| {
            format!(
                r#"<li class="card" data-testid="service-card"><h3>{}</h3><p>{}</p></li>"#,
                escape(service.title.as_str()),
                escape(service.blurb.as_str())
            )
        })
        .collect();

    format!(
        r#"<section class="services" id="services" data-testid="services">
<h2>Services</h2>
<ul class="grid">
{}
</ul>
</section>"#,
        cards.join("\n")
    )
}
