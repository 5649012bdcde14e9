//! Errors raised while loading and checking `folio.toml`.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{0}` not found")]
    Missing(PathBuf),

    #[error("cannot read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid folio.toml: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting that parses but cannot work, e.g. RSS without a site url.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::{error::Error as _, fs};
    use tempfile::TempDir;

    #[test]
    fn test_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("folio.toml")).unwrap_err();
        let err = err.downcast_ref::<ConfigError>().unwrap();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("folio.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_toml_syntax_error() {
        let err = SiteConfig::from_str("[site\ntitle = 1").unwrap_err();
        let err = err.downcast_ref::<ConfigError>().unwrap();

        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid folio.toml: "));
    }

    #[test]
    fn test_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("folio.toml");
        fs::write(&config_path, "[build.rss]\nenable = true\n").unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();

        let mut config = SiteConfig::from_path(&config_path).unwrap();
        config.config_path = config_path;
        config.root = dir.path().to_path_buf();
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("public");

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>().map(ToString::to_string).as_deref(),
            Some("invalid config: [site.url] is required for RSS generation")
        );
    }

    #[test]
    fn test_missing_config_file() {
        let config = SiteConfig {
            config_path: PathBuf::from("/nonexistent/folio.toml"),
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Missing(_))
        ));
    }
}
