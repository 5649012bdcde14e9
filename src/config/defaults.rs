//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn title() -> String {
        "Blog".into()
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.folio".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "feed.xml".into()
        }
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}

// ============================================================================
// [[menu]] Defaults
// ============================================================================

pub fn menu() -> Vec<crate::nav::NavLink> {
    use crate::nav::{HOME, NavLink};
    vec![NavLink::new(HOME, "/"), NavLink::new("Blog", "/blog/")]
}

// ============================================================================
// [donation] / [analytics] / [theme] Defaults
// ============================================================================

pub mod donation {
    pub fn text() -> String {
        "If you find this article to be useful, please kindly consider supporting me. \
         Your support will be much appreciated so I can continue providing useful contents."
            .into()
    }

    pub fn label() -> String {
        "Donations".into()
    }
}

pub mod analytics {
    pub fn endpoint() -> String {
        "/_analytics".into()
    }
}

pub mod theme {
    use std::path::PathBuf;

    pub fn state() -> PathBuf {
        ".folio/preferences.json".into()
    }
}
