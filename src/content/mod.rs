//! Blog content: post records and the store that orders them.
//!
//! ```text
//! posts.toml ──► ContentStore ──► render::listing (forward: title → /blog/{id})
//!                     │
//!                     └─────────► render::detail  (reverse: {id} → first matching post)
//! ```

mod error;
mod post;
mod store;

pub use error::ContentError;
pub use post::{BLOG_PREFIX, PostRecord};
pub use store::{ContentStore, Resolution};
