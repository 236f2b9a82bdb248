//! Content loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or constructing a content store.
///
/// A path segment that matches no post is not an error; see
/// [`Resolution::NotFound`](super::Resolution::NotFound).
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Posts file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("posts `{first}` and `{second}` share the identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_content_error_display() {
        let io_err = ContentError::Io(
            PathBuf::from("content/posts.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("content/posts.toml"));

        let dup = ContentError::DuplicateIdentifier {
            identifier: "kpis".into(),
            first: "KPIs".into(),
            second: "KPIs!".into(),
        };
        let display = format!("{dup}");
        assert!(display.contains("`kpis`"));
        assert!(display.contains("`KPIs!`"));
    }
}
