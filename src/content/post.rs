//! Post records and their frontmatter.
//!
//! A content file is an HTML fragment preceded by a TOML block:
//!
//! ```text
//! +++
//! title = "Hello"
//! date = "2024-03-01"
//! tags = ["rust", "web"]
//! published = true
//! +++
//! <p>Body markup, copied verbatim into the post page.</p>
//! ```

use super::ContentError;
use crate::utils::{date::PostDate, slug::normalize_slug};
use serde::Deserialize;
use std::path::Path;

const FRONTMATTER_DELIMITER: &str = "+++";

/// Slugs owned by generated pages.
const RESERVED_SLUGS: &[&str] = &["blog"];

/// One blog post as supplied by a content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub slug: String,
    pub title: Option<String>,
    pub date: Option<PostDate>,
    pub tags: Vec<String>,
    pub published: bool,
    pub summary: Option<String>,
    pub body: String,
}

impl PostRecord {
    /// A published post with no body, mostly handy for tests.
    pub fn new(slug: impl Into<String>, title: Option<&str>, date: Option<PostDate>) -> Self {
        Self {
            slug: slug.into(),
            title: title.map(str::to_owned),
            date,
            tags: Vec::new(),
            published: true,
            summary: None,
            body: String::new(),
        }
    }

    /// Title if present and not blank, otherwise the slug.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.slug)
    }
}

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    title: Option<String>,
    date: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    published: bool,
    summary: Option<String>,
    slug: Option<String>,
}

/// Parse one content file. `default_slug` is derived from its path and used
/// unless the frontmatter sets `slug`.
pub fn parse_post(path: &Path, default_slug: &str, text: &str) -> Result<PostRecord, ContentError> {
    let (frontmatter, body) = split_frontmatter(text)
        .ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;

    let meta: Frontmatter = toml::from_str(frontmatter)
        .map_err(|err| ContentError::Frontmatter(path.to_path_buf(), err))?;

    let date = match meta.date {
        Some(raw) => Some(PostDate::parse(&raw).ok_or_else(|| ContentError::InvalidDate {
            path: path.to_path_buf(),
            date: raw.clone(),
        })?),
        None => None,
    };

    let slug = match meta.slug.as_deref() {
        Some(custom) => normalize_slug(custom),
        None => default_slug.to_owned(),
    };
    if slug.is_empty() || RESERVED_SLUGS.contains(&slug.as_str()) {
        return Err(ContentError::InvalidSlug(path.to_path_buf()));
    }

    Ok(PostRecord {
        slug,
        title: meta.title,
        date,
        tags: meta.tags,
        published: meta.published,
        summary: meta.summary,
        body: body.trim().to_owned(),
    })
}

/// Split `+++ ... +++` from the body. The opening delimiter must be the first
/// non-blank line.
fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start_matches('\u{feff}').trim_start();
    let rest = text.strip_prefix(FRONTMATTER_DELIMITER)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            let body = &rest[offset + line.len()..];
            return Some((&rest[..offset], body));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"+++
title = "Hello World"
date = "2024-03-01"
tags = ["rust", "web"]
published = true
summary = "First post"
+++

<p>Hi there</p>
"#;

    #[test]
    fn test_parse_post_full() {
        let post = parse_post(Path::new("hello.html"), "blog/hello", POST).unwrap();
        assert_eq!(post.slug, "blog/hello");
        assert_eq!(post.title.as_deref(), Some("Hello World"));
        assert_eq!(post.date, Some(PostDate::from_ymd(2024, 3, 1)));
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert!(post.published);
        assert_eq!(post.summary.as_deref(), Some("First post"));
        assert_eq!(post.body, "<p>Hi there</p>");
    }

    #[test]
    fn test_parse_post_defaults() {
        let text = "+++\n+++\nbody";
        let post = parse_post(Path::new("a.html"), "a", text).unwrap();
        assert_eq!(post.title, None);
        assert_eq!(post.date, None);
        assert!(post.tags.is_empty());
        assert!(!post.published);
        assert_eq!(post.body, "body");
    }

    #[test]
    fn test_parse_post_slug_override() {
        let text = "+++\nslug = \"/notes/Custom Slug/\"\n+++\n";
        let post = parse_post(Path::new("a.html"), "a", text).unwrap();
        assert_eq!(post.slug, "notes/custom-slug");
    }

    #[test]
    fn test_parse_post_reserved_slug() {
        let text = "+++\nslug = \"blog\"\n+++\n";
        let err = parse_post(Path::new("a.html"), "a", text).unwrap_err();
        assert!(matches!(err, ContentError::InvalidSlug(_)));
    }

    #[test]
    fn test_parse_post_missing_frontmatter() {
        let err = parse_post(Path::new("a.html"), "a", "<p>no meta</p>").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter(_)));
    }

    #[test]
    fn test_parse_post_unterminated_frontmatter() {
        let err = parse_post(Path::new("a.html"), "a", "+++\ntitle = \"x\"\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter(_)));
    }

    #[test]
    fn test_parse_post_bad_toml() {
        let err = parse_post(Path::new("a.html"), "a", "+++\ntitle = \n+++\n").unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter(..)));
    }

    #[test]
    fn test_parse_post_bad_date() {
        let text = "+++\ndate = \"March 1\"\n+++\n";
        let err = parse_post(Path::new("a.html"), "a", text).unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { .. }));
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let (meta, body) = split_frontmatter("+++\r\ntitle = \"x\"\r\n+++\r\nbody").unwrap();
        assert_eq!(meta.trim(), "title = \"x\"");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_display_title_fallback() {
        let mut post = PostRecord::new("a", Some(""), None);
        assert_eq!(post.display_title(), "a");
        post.title = Some("   ".into());
        assert_eq!(post.display_title(), "a");
        post.title = None;
        assert_eq!(post.display_title(), "a");
        post.title = Some("B Post".into());
        assert_eq!(post.display_title(), "B Post");
    }
}
