//! Browser side of the theme toggle and click analytics.
//!
//! The scripts run the same state machine as [`crate::theme::ThemeToggle`]
//! against `localStorage`, using the same key and class name. Storage and
//! beacon failures are caught and ignored in the browser too.

use crate::{
    config::SiteConfig,
    theme::{DARK_CLASS, STORAGE_KEY, ThemePreference},
};

/// Runs in `<head>`, before first paint: applies the stored preference, or
/// `initial` when the visitor has none.
const THEME_BOOTSTRAP_TEMPLATE: &str = include_str!("../embed/theme-bootstrap.js");

/// Runs at the end of `<body>`: toggle button and post click beacons.
const CLIENT_TEMPLATE: &str = include_str!("../embed/client.js");

/// Site stylesheet, written to `/style.css`.
pub const STYLESHEET: &str = include_str!("../embed/style.css");

#[allow(clippy::literal_string_with_formatting_args)]
pub fn theme_bootstrap(initial: ThemePreference) -> String {
    THEME_BOOTSTRAP_TEMPLATE
        .replace("{storage_key}", STORAGE_KEY)
        .replace("{dark_class}", DARK_CLASS)
        .replace("{initial}", initial.as_str())
}

/// Client script; analytics is wired only when `[analytics].enable` is set.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn client(config: &SiteConfig) -> String {
    let endpoint = if config.analytics.enable {
        js_string(&config.analytics.endpoint)
    } else {
        "null".to_owned()
    };

    CLIENT_TEMPLATE
        .replace("{storage_key}", STORAGE_KEY)
        .replace("{dark_class}", DARK_CLASS)
        .replace("{endpoint}", &endpoint)
}

/// JS string literal that is also safe inside an inline `<script>`.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_owned())
        .replace("</", "<\\/")
}
