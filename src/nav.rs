//! Header navigation menu.
//!
//! Each link is highlighted when the current route matches it. "Home" only
//! matches its own route exactly (otherwise `/` would prefix every page);
//! every other entry matches any route under its url.

use serde::{Deserialize, Serialize};

/// Name of the entry that uses exact matching.
pub const HOME: &str = "Home";

/// One `[[menu]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Whether this link is the current page for `route`.
    pub fn is_active(&self, route: &str) -> bool {
        if self.name == HOME {
            route == self.url
        } else {
            route.starts_with(&self.url)
        }
    }
}

/// A link ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationMenu {
    links: Vec<NavLink>,
}

impl NavigationMenu {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Links in menu order, each marked active or not for `route`.
    ///
    /// The rule is evaluated per link, so overlapping urls can both be active.
    pub fn items(&self, route: &str) -> Vec<NavItem<'_>> {
        self.links
            .iter()
            .map(|link| NavItem {
                name: &link.name,
                url: &link.url,
                active: link.is_active(route),
            })
            .collect()
    }
}
