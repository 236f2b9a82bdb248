//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata, header and footer shell           |
//! | `[build]`   | Posts file, output, minify, RSS, sitemap         |
//! | `[serve]`   | Development server (port, interface, watch)      |
//! | `[home]`    | Hero copy and services grid                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "PMC Consulting"
//! url = "https://pmc-consult.com"
//!
//! [build]
//! content = "content/posts.toml"
//! output = "public"
//!
//! [build.rss]
//! enable = true
//!
//! [serve]
//! port = 5277
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod home;
mod serve;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;
pub use home::HomeConfig;
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Home page copy
    #[serde(default)]
    pub home: HomeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf());
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        self.update_path_with_root(&root, cli);

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.rss.enable, args.rss.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
            Self::update_option(
                &mut self.build.strict_identifiers,
                args.strict.as_ref(),
            );
            if let Some(url) = &args.base_url {
                self.base.url = Some(url.clone());
            }
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
            self.base.url = Some(self.local_url());
        }
    }

    /// `http://{interface}:{port}` of the development server.
    pub fn local_url(&self) -> String {
        format!("http://{}:{}", self.serve.interface, self.serve.port)
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Absolute path of the RSS feed in the output directory.
    pub fn rss_path(&self) -> PathBuf {
        self.build.output.join(&self.build.rss.path)
    }

    /// Absolute path of the sitemap in the output directory.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Validate configuration before building or serving
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        let feed = if self.build.rss.enable {
            Some("RSS")
        } else if self.build.sitemap.enable {
            Some("sitemap")
        } else {
            None
        };
        match (&self.base.url, feed) {
            (None, Some(feed)) => bail!(ConfigError::MissingBaseUrl(feed)),
            (Some(url), _) if !url.starts_with("http") => {
                bail!(ConfigError::InvalidBaseUrl(url.clone()))
            }
            _ => {}
        }

        if self.build.output == self.build.assets {
            bail!(ConfigError::OutputIsAssets(self.build.output.clone()));
        }

        if let Some(position) = self
            .home
            .services
            .iter()
            .position(|service| service.title.trim().is_empty())
        {
            bail!(ConfigError::UntitledService(position + 1));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
