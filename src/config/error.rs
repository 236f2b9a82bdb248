//! Errors raised while loading or validating `site.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid site.toml")]
    Toml(#[from] toml::de::Error),

    /// Feeds and sitemaps need absolute links.
    #[error("[base.url] is required when {0} generation is enabled")]
    MissingBaseUrl(&'static str),

    #[error("[base.url] must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),

    /// Assets are copied into the output, so the two cannot be the same directory.
    #[error("[build.output] and [build.assets] both point to `{0}`")]
    OutputIsAssets(PathBuf),

    /// 1-based position in `[[home.services]]`.
    #[error("[[home.services]] entry {0} has an empty title")]
    UntitledService(usize),
}
