//! Ordered, read-only collection of posts.
//!
//! The store is an explicit value handed to every composer; there is no global
//! post list. Its order is both the listing order and the match priority used
//! when resolving an identifier back to a post.

use super::{ContentError, PostRecord};
use crate::utils::slug::{identifier_of, is_identifier};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Posts shipped with the binary, used when no posts file exists.
const BUILTIN_POSTS: &str = include_str!("../embed/posts.toml");

/// On-disk shape of a posts file: a single `[[posts]]` array.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PostsFile {
    #[serde(default)]
    posts: Vec<PostRecord>,
}

/// Outcome of resolving a path segment against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a PostRecord),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub const fn post(self) -> Option<&'a PostRecord> {
        match self {
            Self::Found(post) => Some(post),
            Self::NotFound => None,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    posts: Vec<PostRecord>,
}

impl ContentStore {
    /// Build a store from posts in display order.
    ///
    /// Titles that normalize to the same identifier are accepted; the earlier
    /// post shadows the later one during resolution. Use [`Self::strict`] to
    /// reject such stores instead.
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }

    /// Build a store, failing if two titles share an identifier.
    pub fn strict(posts: Vec<PostRecord>) -> Result<Self, ContentError> {
        let store = Self::new(posts);
        store.check_identifiers()?;
        Ok(store)
    }

    /// The posts embedded in the binary.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_POSTS).unwrap_or_default()
    }

    /// Raw text of the embedded posts file, for scaffolding new sites.
    pub const fn builtin_source() -> &'static str {
        BUILTIN_POSTS
    }

    /// Parse a posts file's contents.
    pub fn parse(content: &str) -> Result<Self, ContentError> {
        let file: PostsFile = toml::from_str(content)?;
        Ok(Self::new(file.posts))
    }

    /// Load posts from `path`, falling back to the built-in posts when it does not exist.
    pub fn load(path: &Path, strict: bool) -> Result<Self, ContentError> {
        let posts = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
            Self::parse(&content)?.posts
        } else {
            Self::builtin().posts
        };

        if strict {
            Self::strict(posts)
        } else {
            Ok(Self::new(posts))
        }
    }

    /// All posts in store order.
    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Find the first post, in store order, whose identifier equals `segment`.
    ///
    /// A segment that is not in identifier form can never match, so it
    /// resolves to [`Resolution::NotFound`] without scanning.
    pub fn resolve(&self, segment: &str) -> Resolution<'_> {
        if segment.is_empty() || !is_identifier(segment) {
            return Resolution::NotFound;
        }

        self.posts
            .iter()
            .find(|post| identifier_of(&post.title) == segment)
            .map_or(Resolution::NotFound, Resolution::Found)
    }

    /// Reject stores in which two titles normalize to the same identifier.
    pub fn check_identifiers(&self) -> Result<(), ContentError> {
        let mut seen: FxHashMap<String, &str> = FxHashMap::default();

        for post in &self.posts {
            let identifier = post.identifier();
            if let Some(first) = seen.insert(identifier.clone(), &post.title) {
                return Err(ContentError::DuplicateIdentifier {
                    identifier,
                    first: first.to_owned(),
                    second: post.title.clone(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<PostRecord> for ContentStore {
    fn from_iter<I: IntoIterator<Item = PostRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
