//! Page composition.
//!
//! Every page is a pure function of the config, the content store, and (for
//! detail pages) the requested path segment. Nothing is cached between renders.
//!
//! | Route | Composer | Outcome |
//! |-------|----------|---------|
//! | `/` | [`render_home`] | always found |
//! | `/blog/{identifier}` | [`render_post`] | found, or the not-found view |

mod detail;
mod format;
mod home;
mod layout;
mod listing;

pub use detail::NOT_FOUND_TITLE;
pub use layout::{STYLESHEET, STYLESHEET_PATH};
pub use listing::{Summary, summaries};

use crate::{config::SiteConfig, content::ContentStore};
use detail::render_detail;
use home::render_home_body;
use layout::Layout;

/// Whether a rendered page shows content or the not-found fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Found,
    NotFound,
}

/// A fully rendered HTML document.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: PageStatus,
    pub html: String,
}

/// Render the home page.
pub fn render_home(config: &SiteConfig, store: &ContentStore) -> Page {
    Page {
        status: PageStatus::Found,
        html: Layout::new(config, None).render(&render_home_body(config, store)),
    }
}

/// Render the detail page for `segment`, falling back to the not-found view.
pub fn render_post(config: &SiteConfig, store: &ContentStore, segment: &str) -> Page {
    let (resolution, body) = render_detail(store, segment);
    let status = if resolution.is_found() {
        PageStatus::Found
    } else {
        PageStatus::NotFound
    };
    let title = resolution
        .post()
        .map_or(NOT_FOUND_TITLE, |post| post.title.as_str());

    Page {
        status,
        html: Layout::new(config, Some(title)).render(&body),
    }
}

/// Render the standalone not-found page.
pub fn render_not_found(config: &SiteConfig, store: &ContentStore) -> Page {
    render_post(config, store, "")
}
