//! Content loading error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no `+++` frontmatter block")]
    MissingFrontmatter(PathBuf),

    #[error("frontmatter parsing error in `{0}`")]
    Frontmatter(PathBuf, #[source] toml::de::Error),

    #[error("invalid date `{date}` in `{path}`, expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ")]
    InvalidDate { path: PathBuf, date: String },

    #[error("`{0}` resolves to an empty or reserved slug")]
    InvalidSlug(PathBuf),

    #[error("slug `{slug}` is used by both `{first}` and `{second}`")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
