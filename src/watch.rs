//! File system watcher for live reload.
//!
//! Monitors the posts file, the assets directory and the config file, and
//! rebuilds the site when they change.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌─────────────────────────────┐
//! │ notify   │───▶│ Debouncer│───▶│      handle_changes()       │
//! │ events   │    │ (300ms)  │    │                             │
//! └──────────┘    └──────────┘    │  posts  → reload + swap     │
//!                                 │  assets → rebuild           │
//!                                 │  config → restart hint      │
//!                                 └─────────────────────────────┘
//! ```
//!
//! A posts file that fails to load leaves the served store untouched.

use crate::{
    build::{load_store, write_site},
    config::SiteConfig,
    log,
    logger::WatchStatus,
    serve::SharedStore,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::{
        Arc,
        mpsc::{self, RecvTimeoutError},
    },
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;

/// What a changed path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileCategory {
    Content,
    Asset,
    Config,
    Unknown,
}

fn categorize_path(path: &Path, config: &SiteConfig) -> FileCategory {
    if path == config.build.content || Some(path) == config.build.content.parent() {
        FileCategory::Content
    } else if path == config.config_path {
        FileCategory::Config
    } else if path.starts_with(&config.build.assets) {
        FileCategory::Asset
    } else {
        FileCategory::Unknown
    }
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events into one rebuild.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
        }
    }

    fn add(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        for path in paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Apply a batch of changed paths. Returns true when the site was rebuilt.
fn handle_changes(
    paths: &[PathBuf],
    config: &SiteConfig,
    store: &SharedStore,
    status: &mut WatchStatus,
) -> bool {
    let mut content_changed = false;
    let mut assets_changed = false;
    let mut config_changed = false;

    for path in paths {
        match categorize_path(path, config) {
            FileCategory::Content => content_changed = true,
            FileCategory::Asset => assets_changed = true,
            FileCategory::Config => config_changed = true,
            FileCategory::Unknown => {}
        }
    }

    if config_changed {
        log!("watch"; "{} changed, restart `pmc serve` to apply", config.config_path.display());
    }

    if content_changed {
        match load_store(config) {
            Ok(fresh) => store.store(Arc::new(fresh)),
            Err(e) => {
                status.error("posts reload failed, keeping previous posts", &format!("{e:#}"));
                return false;
            }
        }
    } else if !assets_changed && !config_changed {
        return false;
    }

    let current = store.load();
    match write_site(config, &current) {
        Ok(()) => {
            status.success(&format!("rebuilt, {} posts", current.len()));
            true
        }
        Err(e) => {
            status.error("rebuild failed", &format!("{e:#}"));
            false
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

/// Directory watched for the posts file.
///
/// Editors often replace the file, so its parent is watched. Until that
/// directory exists, the site root is watched for it instead.
fn content_watch_dir(config: &SiteConfig) -> &Path {
    match config.build.content.parent() {
        Some(dir) if dir.exists() => dir,
        _ => config.get_root(),
    }
}

/// Returns the directory watched for the posts file.
fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<PathBuf> {
    let build = &config.build;
    let content_dir = content_watch_dir(config);
    let targets = [
        (content_dir, RecursiveMode::NonRecursive),
        (build.assets.as_path(), RecursiveMode::Recursive),
        (config.config_path.as_path(), RecursiveMode::NonRecursive),
    ];

    for (path, mode) in targets {
        if path.exists() {
            watcher
                .watch(path, mode)
                .with_context(|| format!("Failed to watch {}", path.display()))?;
        }
    }

    if Some(content_dir) == build.content.parent() {
        log!("watch"; "{}", build.content.display());
    } else {
        log!(
            "watch";
            "{} does not exist yet, watching {} for it",
            build.content.display(),
            content_dir.display()
        );
    }
    Ok(content_dir.to_path_buf())
}

/// Start watching the posts directory once it has been created.
fn attach_content_dir(
    watcher: &mut impl Watcher,
    config: &SiteConfig,
    watched: &mut PathBuf,
) -> Result<()> {
    let dir = content_watch_dir(config);
    if dir != watched.as_path() {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
        log!("watch"; "{}", config.build.content.display());
        *watched = dir.to_path_buf();
    }
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking(config: &'static SiteConfig, store: &SharedStore) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    let mut content_dir = setup_watchers(&mut watcher, config)?;

    let mut debouncer = Debouncer::new();
    let mut status = WatchStatus::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) => debouncer.add(event.paths),
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                if let Err(e) = attach_content_dir(&mut watcher, config, &mut content_dir) {
                    log!("watch"; "{e}");
                }
                handle_changes(&debouncer.take(), config, store, &mut status);
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use arc_swap::ArcSwap;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.config_path = dir.path().join("site.toml");
        config.build.content = dir.path().join("content/posts.toml");
        config.build.assets = dir.path().join("assets");
        config.build.output = dir.path().join("public");
        config.build.minify = false;
        fs::create_dir_all(dir.path().join("content")).unwrap();
        config
    }

    fn shared(store: ContentStore) -> SharedStore {
        Arc::new(ArcSwap::from_pointee(store))
    }

    const ONE_POST: &str = r#"
        [[posts]]
        title = "Fresh Post"
        date = "2025-09-01"
        excerpt = "new"
    "#;

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("posts.toml~")));
        assert!(is_temp_file(Path::new(".posts.toml.swp")));
        assert!(is_temp_file(Path::new("posts.tmp")));
        assert!(!is_temp_file(Path::new("posts.toml")));
    }

    #[test]
    fn test_categorize_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        assert_eq!(
            categorize_path(&config.build.content, &config),
            FileCategory::Content
        );
        assert_eq!(
            categorize_path(&config.config_path, &config),
            FileCategory::Config
        );
        assert_eq!(
            categorize_path(&config.build.assets.join("img/logo.svg"), &config),
            FileCategory::Asset
        );
        assert_eq!(
            categorize_path(&dir.path().join("content/notes.md"), &config),
            FileCategory::Unknown
        );
    }

    #[test]
    fn test_content_watch_dir_falls_back_to_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.set_root(dir.path());
        config.build.content = dir.path().join("content/posts.toml");

        assert_eq!(content_watch_dir(&config), dir.path());

        fs::create_dir_all(dir.path().join("content")).unwrap();
        assert_eq!(content_watch_dir(&config), dir.path().join("content"));
    }

    #[test]
    fn test_handle_changes_posts_dir_created_later() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        fs::write(&config.build.content, ONE_POST).unwrap();
        let store = shared(ContentStore::builtin());

        let content_dir = dir.path().join("content");
        assert_eq!(categorize_path(&content_dir, &config), FileCategory::Content);

        let rebuilt = handle_changes(&[content_dir], &config, &store, &mut WatchStatus::new());

        assert!(rebuilt);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_debouncer_batches_and_filters() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.ready());
        assert_eq!(debouncer.timeout(), Duration::from_secs(60));

        debouncer.add([
            PathBuf::from("/site/content/posts.toml"),
            PathBuf::from("/site/content/posts.toml"),
            PathBuf::from("/site/content/posts.toml~"),
        ]);
        assert_eq!(debouncer.timeout(), Duration::from_millis(DEBOUNCE_MS));

        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS));
        assert!(debouncer.ready());

        let paths = debouncer.take();
        assert_eq!(paths, vec![PathBuf::from("/site/content/posts.toml")]);
        assert!(!debouncer.ready());
    }

    #[test]
    fn test_handle_changes_reloads_posts() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        fs::write(&config.build.content, ONE_POST).unwrap();
        let store = shared(ContentStore::builtin());

        let rebuilt = handle_changes(
            &[config.build.content.clone()],
            &config,
            &store,
            &mut WatchStatus::new(),
        );

        assert!(rebuilt);
        assert_eq!(store.load().len(), 1);
        assert!(store.load().resolve("fresh-post").is_found());
        assert!(
            config
                .build
                .output
                .join("blog/fresh-post/index.html")
                .is_file()
        );
    }

    #[test]
    fn test_handle_changes_keeps_store_on_bad_posts() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        fs::write(&config.build.content, "[[posts]]\ntitle = 3\n").unwrap();
        let store = shared(ContentStore::builtin());

        let rebuilt = handle_changes(
            &[config.build.content.clone()],
            &config,
            &store,
            &mut WatchStatus::new(),
        );

        assert!(!rebuilt);
        assert_eq!(store.load().len(), 4);
    }

    #[test]
    fn test_handle_changes_assets_rebuild_current_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let logo = config.build.assets.join("logo.svg");
        fs::create_dir_all(&config.build.assets).unwrap();
        fs::write(&logo, "<svg/>").unwrap();
        let store = shared(ContentStore::builtin());

        let rebuilt = handle_changes(&[logo], &config, &store, &mut WatchStatus::new());

        assert!(rebuilt);
        assert_eq!(store.load().len(), 4);
        assert!(config.build.output.join("logo.svg").is_file());
    }

    #[test]
    fn test_handle_changes_ignores_unrelated() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let store = shared(ContentStore::builtin());

        let rebuilt = handle_changes(
            &[dir.path().join("README.md")],
            &config,
            &store,
            &mut WatchStatus::new(),
        );

        assert!(!rebuilt);
        assert!(!config.build.output.exists());
    }
}
