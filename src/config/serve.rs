//! `[serve]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// `[serve]` section in folio.toml - development server settings.
///
/// # Example
/// ```toml
/// [serve]
/// interface = "0.0.0.0"  # Listen on all interfaces
/// port = 3000
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: String,

    /// HTTP port number (default: 5277).
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,
}

impl ServeConfig {
    /// Base url of the preview server. IPv6 interfaces are bracketed.
    pub fn local_url(&self) -> String {
        match self.interface.parse::<IpAddr>() {
            Ok(ip) => format!("http://{}", SocketAddr::new(ip, self.port)),
            Err(_) => format!("http://{}:{}", self.interface, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_serve_config() {
        let config = r#"
            [serve]
            interface = "0.0.0.0"
            port = 8080
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.serve.interface, "0.0.0.0");
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_serve_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.serve.interface, "127.0.0.1");
        assert_eq!(config.serve.port, 5277);
    }

    #[test]
    fn test_local_url() {
        let mut config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.serve.local_url(), "http://127.0.0.1:5277");

        config.serve.interface = "::1".into();
        assert_eq!(config.serve.local_url(), "http://[::1]:5277");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [serve]
            watch = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
