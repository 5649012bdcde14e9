//! URL slug utilities.
//!
//! Content files are addressed by slug: the path relative to the content
//! directory, without extension, each segment transliterated to ASCII and
//! lowercased with runs of other characters collapsed to `-`.

use std::path::Path;

/// Convert one path segment or title fragment to URL-safe form.
pub fn slugify_segment(text: &str) -> String {
    let ascii = deunicode::deunicode(text.trim());
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Slug for a content file, given its path relative to the content root.
///
/// `blog/Hello World.html` → `blog/hello-world`
pub fn slugify_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| slugify_segment(&c.as_os_str().to_string_lossy()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Normalize a user-supplied slug (frontmatter override): trim slashes and
/// slugify each segment.
pub fn normalize_slug(slug: &str) -> String {
    slug.split('/')
        .map(slugify_segment)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Route of a slug: `blog/hello` → `/blog/hello/`
pub fn slug_route(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_owned()
    } else {
        format!("/{slug}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_slugify_segment_basic() {
        assert_eq!(slugify_segment("Hello World"), "hello-world");
        assert_eq!(slugify_segment("  Hello   World  "), "hello-world");
    }

    #[test]
    fn test_slugify_segment_punctuation() {
        assert_eq!(slugify_segment("My Article (2024) - Part #1"), "my-article-2024-part-1");
        assert_eq!(slugify_segment("<>:?*#"), "");
    }

    #[test]
    fn test_slugify_segment_keeps_underscore() {
        assert_eq!(slugify_segment("snake_case"), "snake_case");
    }

    #[test]
    fn test_slugify_segment_transliterates() {
        assert_eq!(slugify_segment("Café Déjà Vu"), "cafe-deja-vu");
    }

    #[test]
    fn test_slugify_path() {
        let path = PathBuf::from("blog/Hello World.html");
        assert_eq!(slugify_path(&path), "blog/hello-world");
        assert_eq!(slugify_path(Path::new("about.html")), "about");
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("/blog/My Post/"), "blog/my-post");
        assert_eq!(normalize_slug("///"), "");
    }

    #[test]
    fn test_slug_route() {
        assert_eq!(slug_route("blog/post-1"), "/blog/post-1/");
        assert_eq!(slug_route(""), "/");
    }
}
