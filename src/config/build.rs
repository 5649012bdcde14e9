//! `[build]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - paths and output options.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// output = "public"
/// minify = true
///
/// [build.rss]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory scanned for `*.html` posts.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static files copied verbatim into the output.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    #[serde(default)]
    pub rss: RssConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.rss]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(!config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            content = "posts"
            output = "dist"
            minify = false

            [build.rss]
            enable = true
            path = "rss.xml"

            [build.sitemap]
            enable = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("posts"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("rss.xml"));
        assert!(config.build.sitemap.enable);
    }

    #[test]
    fn test_build_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[build]\ntypst = true\n");
        assert!(result.is_err());
    }
}
