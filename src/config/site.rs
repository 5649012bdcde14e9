//! `[site]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml - who the site belongs to.
///
/// # Example
/// ```toml
/// [site]
/// title = "Alice's Blog"
/// description = "A personal blog by Alice.\nI code, and I teach stuff that I learn."
/// author = "Alice"
/// email = "alice@example.com"
/// resume = "https://example.com/resume.pdf"
/// url = "https://alice.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteMetadata {
    /// Title of the home page and the feed.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Intro shown above the post list; each line is a paragraph.
    #[serde(default)]
    pub description: String,

    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    #[serde(default = "defaults::site::email")]
    #[educe(Default = defaults::site::email())]
    pub email: String,

    /// Link to a resume, shown in the footer.
    #[serde(default)]
    pub resume: Option<String>,

    /// Absolute site url; required for RSS and canonical links.
    #[serde(default)]
    pub url: Option<String>,

    /// BCP 47 language code.
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,
}
