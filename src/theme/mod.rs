//! Dark / light theme preference.
//!
//! [`ThemeToggle`] is the only writer of the preference. It reads the stored
//! value once when created, and on every [`ThemeToggle::toggle`] flips the
//! state, updates the root element classes and writes the new value back.
//! Everything else reads a copied [`ThemePreference`].
//!
//! When storage fails the toggle keeps working for the rest of the session;
//! the preference just is not remembered.

mod store;

pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, UnavailableStore};

use crate::log;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key of the preference.
pub const STORAGE_KEY: &str = "theme";

/// Class carried by the root element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class list of the document root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClasses {
    classes: Vec<String>,
}

impl RootClasses {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Value for an HTML `class` attribute.
    pub fn to_attr(&self) -> String {
        self.classes.join(" ")
    }
}

pub struct ThemeToggle<S> {
    store: S,
    current: ThemePreference,
    root: RootClasses,
    persistent: bool,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Read the stored preference and apply it to a fresh root.
    ///
    /// Unset, unrecognized or unreadable values all start dark.
    pub fn load(store: S) -> Self {
        Self::load_or(store, ThemePreference::default())
    }

    /// Like [`load`](Self::load), starting from `fallback` when nothing
    /// usable is stored.
    pub fn load_or(store: S, fallback: ThemePreference) -> Self {
        Self::init(store, RootClasses::default(), fallback)
    }

    /// Like [`load`](Self::load) but applies to an existing class list.
    pub fn with_root(store: S, root: RootClasses) -> Self {
        Self::init(store, root, ThemePreference::default())
    }

    fn init(store: S, root: RootClasses, fallback: ThemePreference) -> Self {
        let (current, persistent) = match store.load(STORAGE_KEY) {
            Ok(value) => (
                value
                    .as_deref()
                    .and_then(ThemePreference::parse)
                    .unwrap_or(fallback),
                true,
            ),
            Err(_) => (fallback, false),
        };

        let mut toggle = Self {
            store,
            current,
            root,
            persistent,
        };
        toggle.apply();
        toggle
    }

    pub fn preference(&self) -> ThemePreference {
        self.current
    }

    pub fn root(&self) -> &RootClasses {
        &self.root
    }

    /// Whether the last storage access succeeded. After a failed read this
    /// is false until a write goes through.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Flip the theme, update the root classes, then persist.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.flipped();
        self.apply();
        match self.store.save(STORAGE_KEY, self.current.as_str()) {
            Ok(()) => self.persistent = true,
            Err(err) => {
                if self.persistent {
                    log!("warn"; "{err}, keeping the theme for this session only");
                }
                self.persistent = false;
            }
        }
        self.current
    }

    fn apply(&mut self) {
        if self.current.is_dark() {
            self.root.add(DARK_CLASS);
        } else {
            self.root.remove(DARK_CLASS);
        }
    }
}
