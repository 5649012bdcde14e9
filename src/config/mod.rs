//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[site]`      | Site metadata (title, author, email, resume)   |
//! | `[build]`     | Paths, minification, RSS, sitemap              |
//! | `[serve]`     | Development server (interface, port)           |
//! | `[[menu]]`    | Header navigation links                        |
//! | `[social]`    | Footer profile links                           |
//! | `[donation]`  | Donation call-to-action                        |
//! | `[analytics]` | Post click beacons                             |
//! | `[theme]`     | Default theme and where the preference lives   |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Blog"
//! author = "Alice"
//! url = "https://alice.dev"
//!
//! [[menu]]
//! name = "Home"
//! url = "/"
//!
//! [[menu]]
//! name = "Blog"
//! url = "/blog/"
//!
//! [build.rss]
//! enable = true
//! ```

mod build;
mod chrome;
pub mod defaults;
mod error;
mod serve;
mod site;

pub use build::BuildConfig;
pub use chrome::{AnalyticsConfig, DonationConfig, SocialConfig, ThemeConfig};
pub use error::ConfigError;
pub use serve::ServeConfig;
pub use site::SiteMetadata;

use crate::{
    cli::{Cli, Commands},
    nav::NavLink,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteMetadata,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default = "defaults::menu")]
    #[educe(Default = defaults::menu())]
    pub menu: Vec<NavLink>,

    #[serde(default)]
    pub social: SocialConfig,

    #[serde(default)]
    pub donation: DonationConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Absolute url of a site route, or the route itself when no url is set.
    pub fn page_url(&self, route: &str) -> String {
        match &self.site.url {
            Some(base) => format!("{}{route}", base.trim_end_matches('/')),
            None => route.to_owned(),
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        self.update_path_with_root(&root, cli);

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.rss.enable, args.rss.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
            if let Some(url) = &args.base_url {
                self.site.url = Some(url.clone());
            }
        }

        if let Commands::Serve {
            interface,
            port,
            build_args,
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            if build_args.base_url.is_none() {
                self.site.url = Some(self.serve.local_url());
            }
        }
    }

    /// Point the site url at the address the preview server actually bound,
    /// unless `--base-url` was given.
    pub fn update_with_bound_addr(&mut self, addr: SocketAddr, cli: &Cli) {
        self.serve.interface = addr.ip().to_string();
        self.serve.port = addr.port();
        if cli.build_args().is_some_and(|args| args.base_url.is_none()) {
            self.site.url = Some(self.serve.local_url());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve every path against the site root
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));

        // Keep `~/...` for FileStore to expand
        if self.theme.state.is_relative() && !self.theme.state.starts_with("~") {
            self.theme.state = root.join(&self.theme.state);
        }

        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!(ConfigError::Missing(self.config_path.clone()));
        }

        if !self.build.content.is_dir() {
            bail!(ConfigError::Invalid(format!(
                "[build.content] directory `{}` does not exist",
                self.build.content.display()
            )));
        }

        if let Some(url) = &self.site.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Invalid(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if self.build.rss.enable && self.site.url.is_none() {
            bail!(ConfigError::Invalid(
                "[site.url] is required for RSS generation".into()
            ));
        }

        let mut names = HashSet::new();
        for link in &self.menu {
            if !names.insert(link.name.as_str()) {
                bail!(ConfigError::Invalid(format!(
                    "[[menu]] entry `{}` is defined twice",
                    link.name
                )));
            }
            if !link.url.starts_with('/') && !link.url.starts_with("http") {
                bail!(ConfigError::Invalid(format!(
                    "[[menu]] entry `{}` must link to `/...` or an http(s) url",
                    link.name
                )));
            }
        }

        if self.build.output == self.root || self.build.output == self.build.content {
            bail!(ConfigError::Invalid(
                "[build.output] must not be the site root or the content directory".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn site_with_config(toml: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("folio.toml"), toml).unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        dir
    }

    fn load(dir: &TempDir, args: &[&str]) -> SiteConfig {
        let root = dir.path().to_str().unwrap();
        let mut argv = vec!["folio", "--root", root];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);

        let mut config = SiteConfig::from_path(&dir.path().join("folio.toml")).unwrap();
        config.update_with_cli(&cli);
        config
    }

    #[test]
    fn test_default_menu() {
        let config: SiteConfig = toml::from_str("").unwrap();
        let names: Vec<_> = config.menu.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Blog"]);
    }

    #[test]
    fn test_custom_menu_replaces_default() {
        let config = r#"
            [[menu]]
            name = "Home"
            url = "/"

            [[menu]]
            name = "Projects"
            url = "/projects/"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.menu[1], NavLink::new("Projects", "/projects/"));
    }

    #[test]
    fn test_paths_resolved_against_root() {
        let dir = site_with_config("");
        let config = load(&dir, &["build"]);
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.root, root);
        assert_eq!(config.config_path, root.join("folio.toml"));
        assert_eq!(config.build.content, root.join("content"));
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.theme.state, root.join(".folio/preferences.json"));
    }

    #[test]
    fn test_cli_overrides_build_options() {
        let dir = site_with_config("[build]\nminify = true\n");
        let config = load(
            &dir,
            &["-o", "dist", "build", "--clean", "--minify", "false", "--rss", "--base-url", "https://x.dev"],
        );

        assert!(config.build.clean);
        assert!(!config.build.minify);
        assert!(config.build.rss.enable);
        assert_eq!(config.site.url.as_deref(), Some("https://x.dev"));
        assert!(config.build.output.ends_with("dist"));
    }

    #[test]
    fn test_serve_sets_local_url() {
        let dir = site_with_config("[site]\nurl = \"https://alice.dev\"\n");
        let config = load(&dir, &["serve", "-p", "9000"]);

        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.site.url.as_deref(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn test_serve_url_follows_bound_port() {
        let dir = site_with_config("");
        let cli = Cli::parse_from(["folio", "serve", "-i", "::1", "-p", "9000"]);
        let mut config = load(&dir, &["serve", "-i", "::1", "-p", "9000"]);
        assert_eq!(config.site.url.as_deref(), Some("http://[::1]:9000"));

        config.update_with_bound_addr("[::1]:9002".parse().unwrap(), &cli);
        assert_eq!(config.serve.port, 9002);
        assert_eq!(config.site.url.as_deref(), Some("http://[::1]:9002"));
    }

    #[test]
    fn test_bound_addr_keeps_base_url() {
        let dir = site_with_config("");
        let args = ["serve", "-p", "9000", "--base-url", "https://alice.dev"];
        let mut config = load(&dir, &args);
        let cli = Cli::parse_from(std::iter::once("folio").chain(args));

        config.update_with_bound_addr("127.0.0.1:9001".parse().unwrap(), &cli);
        assert_eq!(config.site.url.as_deref(), Some("https://alice.dev"));
    }

    #[test]
    fn test_validate_ok() {
        let dir = site_with_config("[site]\nurl = \"https://alice.dev\"\n[build.rss]\nenable = true\n");
        assert!(load(&dir, &["build"]).validate().is_ok());
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let dir = site_with_config("");
        fs::remove_dir(dir.path().join("content")).unwrap();
        let err = load(&dir, &["build"]).validate().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_rss_requires_url() {
        let dir = site_with_config("[build.rss]\nenable = true\n");
        let err = load(&dir, &["build"]).validate().unwrap_err();
        assert!(err.to_string().contains("required for RSS"));
    }

    #[test]
    fn test_validate_bad_url_scheme() {
        let dir = site_with_config("[site]\nurl = \"alice.dev\"\n");
        assert!(load(&dir, &["build"]).validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_menu_entry() {
        let dir = site_with_config(
            "[[menu]]\nname = \"Blog\"\nurl = \"/blog/\"\n[[menu]]\nname = \"Blog\"\nurl = \"/b/\"\n",
        );
        let err = load(&dir, &["build"]).validate().unwrap_err();
        assert!(err.to_string().contains("defined twice"));
    }

    #[test]
    fn test_validate_relative_menu_url() {
        let dir = site_with_config("[[menu]]\nname = \"Blog\"\nurl = \"blog\"\n");
        assert!(load(&dir, &["build"]).validate().is_err());
    }

    #[test]
    fn test_page_url() {
        let mut config = SiteConfig::default();
        assert_eq!(config.page_url("/blog/"), "/blog/");

        config.site.url = Some("https://alice.dev/".into());
        assert_eq!(config.page_url("/blog/"), "https://alice.dev/blog/");
    }

    #[test]
    fn test_from_str_reports_toml_error() {
        let err = SiteConfig::from_str("[site\n").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
