//! Light/dark theme preference.
//!
//! Reads the stored preference once at startup and writes it back on every
//! toggle. The applied theme lives here; components derive the `bright-mode`
//! class on the main content container from [`ThemeStore::theme`].
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are not surfaced: the toggle still flips the on-screen
//! theme even if the write is dropped, so the page stays usable and the next
//! load simply falls back to the default.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

pub const STORAGE_KEY: &str = "theme";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Bright,
}

impl Theme {
    /// Parse a stored value. Anything other than the two known tokens is
    /// treated as "no preference".
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "bright" => Some(Self::Bright),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Bright => "bright",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Bright,
            Self::Bright => Self::Dark,
        }
    }

    /// Whether the `bright-mode` class should be present.
    #[must_use]
    pub fn is_bright(self) -> bool {
        self == Self::Bright
    }
}

/// Applied theme plus the store it persists to.
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Build the store and apply whatever preference was persisted.
    pub fn load(store: S) -> Self {
        let current = Self::read(&store);
        log::debug!("theme loaded: {}", current.as_str());
        Self { store, current }
    }

    /// Stored preference, defaulting to [`Theme::Bright`].
    pub fn read(store: &S) -> Theme {
        store
            .get(STORAGE_KEY)
            .and_then(|raw| Theme::from_stored(&raw))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flip the applied theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        self.store.set(STORAGE_KEY, self.current.as_str());
        self.current
    }
}
