//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    feed::ContentFeed,
    log,
    render::pages::BLOG_ROUTE,
    utils::{
        minify::{MinifyKind, minify},
        slug::slug_route,
    },
};
use anyhow::{Context, Result};
use std::{fmt::Write as _, fs};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, feed: &ContentFeed) -> Result<()> {
    if config.build.sitemap.enable {
        let xml = sitemap_xml(&url_entries(config, feed));
        let xml = minify(MinifyKind::Xml, &xml, config);
        let path = config.build.output.join(&config.build.sitemap.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, xml.as_bytes())
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    }
    Ok(())
}

struct UrlEntry {
    loc: String,
    /// YYYY-MM-DD
    lastmod: Option<String>,
}

/// Home, blog listing, then every published post.
fn url_entries(config: &SiteConfig, feed: &ContentFeed) -> Vec<UrlEntry> {
    let newest = feed.posts().first().and_then(|p| p.date).map(|d| d.to_ymd());

    let listing = ["/", BLOG_ROUTE].into_iter().map(|route| UrlEntry {
        loc: config.page_url(route),
        lastmod: newest.clone(),
    });
    let posts = feed.posts().iter().map(|post| UrlEntry {
        loc: config.page_url(&slug_route(&post.slug)),
        lastmod: post.date.map(|d| d.to_ymd()),
    });

    listing.chain(posts).collect()
}

fn sitemap_xml(entries: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 96);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, r#"<urlset xmlns="{SITEMAP_NS}">"#);
    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc));
        if let Some(lastmod) = &entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::PostRecord, utils::date::PostDate};
    use tempfile::TempDir;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://alice.dev".into());
        config.build.sitemap.enable = true;
        config
    }

    fn make_feed() -> ContentFeed {
        ContentFeed::new(vec![
            PostRecord::new("blog/old", Some("Old"), PostDate::parse("2023-05-01")),
            PostRecord::new("blog/new", Some("New"), PostDate::parse("2025-01-01")),
            PostRecord::new("notes/undated", None, None),
        ])
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_xml(r#""it's""#), "&quot;it&apos;s&quot;");
    }

    #[test]
    fn test_url_entries() {
        let entries = url_entries(&make_config(), &make_feed());
        let locs: Vec<_> = entries.iter().map(|e| e.loc.as_str()).collect();

        assert_eq!(
            locs,
            vec![
                "https://alice.dev/",
                "https://alice.dev/blog/",
                "https://alice.dev/blog/new/",
                "https://alice.dev/blog/old/",
                "https://alice.dev/notes/undated/",
            ]
        );
        assert_eq!(entries[0].lastmod.as_deref(), Some("2025-01-01"));
        assert_eq!(entries[4].lastmod, None);
    }

    #[test]
    fn test_sitemap_xml() {
        let xml = sitemap_xml(&url_entries(&make_config(), &make_feed()));

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.contains("<lastmod>2023-05-01</lastmod>"));
    }

    #[test]
    fn test_sitemap_empty_feed() {
        let xml = sitemap_xml(&url_entries(&make_config(), &ContentFeed::default()));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().to_path_buf();

        build_sitemap(&config, &make_feed()).unwrap();
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://alice.dev/blog/new/</loc>"));
        assert!(!xml.contains('\n'));
    }
}
