//! Content sources: where post records come from.

use super::{ContentError, ContentSource, PostRecord, parse_post};
use crate::utils::slug::slugify_path;
use rayon::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Extension of content files.
const CONTENT_EXT: &str = "html";

/// Reads every `*.html` file under a directory.
///
/// Files are visited in sorted path order so that posts sharing a date keep
/// a stable order between builds.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn content_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| p.extension().is_some_and(|ext| ext == CONTENT_EXT))
            .collect()
    }

    fn read_post(&self, path: &Path) -> Result<PostRecord, ContentError> {
        let text =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        parse_post(path, &slugify_path(relative), &text)
    }
}

impl ContentSource for DirectorySource {
    fn posts(&self) -> Result<Vec<PostRecord>, ContentError> {
        let files = self.content_files();

        // par_iter + collect keeps input order
        let posts = files
            .par_iter()
            .map(|path| self.read_post(path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(posts.len());
        for (post, path) in posts.iter().zip(&files) {
            if let Some(first) = seen.insert(&post.slug, path) {
                return Err(ContentError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: first.to_path_buf(),
                    second: path.clone(),
                });
            }
        }

        Ok(posts)
    }
}

/// Posts held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    posts: Vec<PostRecord>,
}

impl MemorySource {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }
}

impl ContentSource for MemorySource {
    fn posts(&self) -> Result<Vec<PostRecord>, ContentError> {
        Ok(self.posts.clone())
    }
}
