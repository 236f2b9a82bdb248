//! Utility modules shared by the renderer and the generators.

pub mod date;
pub mod minify;
pub mod slug;
