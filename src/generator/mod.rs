//! Feeds written alongside the rendered pages.

pub mod rss;
pub mod sitemap;

pub use self::rss::build_rss;
pub use self::sitemap::build_sitemap;
