//! Light/dark theme preference.
//!
//! The preference is persisted under [`THEME_STORAGE_KEY`] and mirrored onto the
//! document root as `data-theme`. Every `.theme-toggle` checkbox renders from the
//! same shared signal, so applying a theme re-syncs all of them at once.

mod view;
pub use view::{use_theme_provider, ThemeToggle};

use tracing::warn;

use crate::core::platform;
use crate::core::storage::{SettingsStore, StorageError};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme selected by a toggle in the given checked state.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Checked state every toggle shows for this theme.
    pub fn is_checked(self) -> bool {
        self == Theme::Dark
    }
}

/// Persisted theme if there is a valid one, otherwise the OS preference.
pub fn initial_theme(store: &impl SettingsStore, prefers_dark: bool) -> Theme {
    match store.get(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => match Theme::parse(&raw) {
            Some(theme) => return theme,
            None => warn!(value = %raw, "ignoring unrecognised stored theme"),
        },
        Ok(None) => {}
        Err(err) => warn!(%err, "could not read stored theme"),
    }
    Theme::from_checked(prefers_dark)
}

/// Mark the document with `theme` and persist it.
pub fn apply_theme(store: &impl SettingsStore, theme: Theme) -> Result<(), StorageError> {
    platform::set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
    store.set(THEME_STORAGE_KEY, theme.as_str())
}
