//! `[social]`, `[donation]`, `[analytics]` and `[theme]` sections: the page
//! chrome around every post.

use super::defaults;
use crate::theme::ThemePreference;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[social]` section - outbound profile links in the footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,
}

/// `[donation]` section - support call-to-action under the content.
///
/// # Example
/// ```toml
/// [donation]
/// url = "https://paypal.me/alice"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DonationConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Panel is only shown once this is set.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "defaults::donation::text")]
    #[educe(Default = defaults::donation::text())]
    pub text: String,

    /// Button caption.
    #[serde(default = "defaults::donation::label")]
    #[educe(Default = defaults::donation::label())]
    pub label: String,
}

impl DonationConfig {
    /// Donation url if the panel should be rendered.
    pub fn active_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|_| self.enable)
    }
}

/// `[analytics]` section - post click beacons.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Where the browser posts click events. `folio serve` answers the default.
    #[serde(default = "defaults::analytics::endpoint")]
    #[educe(Default = defaults::analytics::endpoint())]
    pub endpoint: String,
}

/// `[theme]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// File holding the stored theme preference, relative to the site root.
    #[serde(default = "defaults::theme::state")]
    #[educe(Default = defaults::theme::state())]
    pub state: PathBuf,

    /// Theme for visitors who have not picked one, and for builds when
    /// `state` holds nothing.
    #[serde(default)]
    pub default: ThemePreference,
}
