//! Site building orchestration.
//!
//! # Output layout
//!
//! ```text
//! public/
//! ├── index.html                 home: hero, services, blog listing
//! ├── 404.html                   not-found view
//! ├── style.css
//! ├── blog/{identifier}/index.html
//! ├── feed.xml                   when [build.rss] enable = true
//! ├── sitemap.xml                when [build.sitemap] enable = true
//! └── ...                        files copied from assets/
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    generator::{build_rss, build_sitemap},
    log,
    render::{self, STYLESHEET, STYLESHEET_PATH, Summary, summaries},
    utils::minify::{Markup, minify},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Load the posts file and write the whole site.
///
/// Returns the loaded store so the dev server can render from the same data.
pub fn build_site(config: &SiteConfig) -> Result<ContentStore> {
    let store = load_store(config)?;
    write_site(config, &store)?;
    Ok(store)
}

/// Load the content store configured in `[build] content`.
pub fn load_store(config: &SiteConfig) -> Result<ContentStore> {
    let path = &config.build.content;
    if !path.exists() {
        log!("content"; "{} not found, using built-in posts", path.display());
    }

    ContentStore::load(path, config.build.strict_identifiers)
        .with_context(|| format!("Failed to load posts from {}", path.display()))
}

/// Render every page of `store` into the output directory.
pub fn write_site(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let home = render::render_home(config, store);
    write_html(&output.join("index.html"), &home.html, config)?;

    let not_found = render::render_not_found(config, store);
    write_html(&output.join("404.html"), &not_found.html, config)?;

    fs::write(
        output.join(STYLESHEET_PATH.trim_start_matches('/')),
        STYLESHEET,
    )
    .context("Failed to write stylesheet")?;

    if store.is_empty() {
        log!("content"; "no posts, writing an empty listing");
    }
    let pages = reachable_posts(store);
    pages.par_iter().try_for_each(|summary| {
        let page = render::render_post(config, store, &summary.identifier);
        write_html(&post_html_path(output, summary), &page.html, config)
    })?;
    log!("build"; "{} posts", pages.len());

    let copied = copy_assets(&config.build.assets, output)?;
    if copied > 0 {
        log!("assets"; "copied {copied} files");
    }

    let (rss_result, sitemap_result) = rayon::join(
        || build_rss(config, store),
        || build_sitemap(config, store),
    );
    rss_result?;
    sitemap_result?;

    log!("build"; "done");
    Ok(())
}

/// Posts that own their detail URL.
///
/// A post whose identifier is empty has no URL, and a post whose identifier was
/// already taken by an earlier post is shadowed by it.
fn reachable_posts(store: &ContentStore) -> Vec<Summary<'_>> {
    let mut seen = FxHashSet::default();

    summaries(store)
        .filter(|summary| {
            if summary.identifier.is_empty() {
                log!("warn"; "`{}` has no URL identifier, skipped", summary.post.title);
                return false;
            }
            if !seen.insert(summary.identifier.clone()) {
                log!(
                    "warn";
                    "`{}` is shadowed by an earlier post at {}",
                    summary.post.title,
                    summary.href()
                );
                return false;
            }
            true
        })
        .collect()
}

/// `{output}/blog/{identifier}/index.html`
fn post_html_path(output: &Path, summary: &Summary<'_>) -> PathBuf {
    output
        .join(summary.href().trim_start_matches('/'))
        .join("index.html")
}

/// Create the output directory, removing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_html(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let html = minify(Markup::Html(html), config.build.minify);
    fs::write(path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy every file under `assets` into `output`, keeping relative paths.
fn copy_assets(assets: &Path, output: &Path) -> Result<usize> {
    if !assets.is_dir() {
        return Ok(0);
    }

    let files: Vec<PathBuf> = WalkDir::new(assets)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.par_iter().try_for_each(|source| {
        let relative = source.strip_prefix(assets)?;
        let target = output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target)
            .with_context(|| format!("Failed to copy {}", source.display()))?;
        Ok::<_, anyhow::Error>(())
    })?;

    Ok(files.len())
}
