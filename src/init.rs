//! Site initialization module.
//!
//! Creates a new site with the default configuration and the built-in posts.

use crate::{config::SiteConfig, content::ContentStore, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Default config filename
const CONFIG_FILE: &str = "site.toml";

/// Default posts file, relative to the site root
const POSTS_FILE: &str = "content/posts.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content", "assets"];

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Without a name the site goes into the current directory, which must be empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `pmc init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_default_posts(root)?;

    let output = config.build.output.strip_prefix(root).unwrap_or(&config.build.output);
    init_ignored_files(root, &[output])?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)
        .with_context(|| format!("Failed to write {CONFIG_FILE}"))?;
    Ok(())
}

/// Seed the posts file with the built-in posts
fn init_default_posts(root: &Path) -> Result<()> {
    fs::write(root.join(POSTS_FILE), ContentStore::builtin_source())
        .with_context(|| format!("Failed to write {POSTS_FILE}"))?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `pmc init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Initialize ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .map(|p| format!("/{}/", p.trim_matches('/')))
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, format!("{content}\n"))?;
        }
    }

    Ok(())
}
