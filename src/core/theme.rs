//! Dark/light theme state.
//!
//! [`ThemeStore`] wraps exactly one [`ThemeMode`]. Its initial value is
//! resolved from a priority chain of sources and every transition writes
//! through to the root `data-mode` attribute and, optionally, to storage.
//! Browser access goes through the capabilities bundled in [`ThemeEnv`].

use std::fmt;
use std::str::FromStr;

use crate::config::theme::{DARK_QUERY, LIGHT_QUERY, STORAGE_KEY};
use crate::core::error::InvalidThemeError;
use crate::core::storage::{Backend, StorageProvider};

// =============================================================================
// ThemeMode
// =============================================================================

/// One of the two supported color-scheme modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Font Awesome glyph shown on the mode toggle (moon / sun).
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{f186}",
            Self::Light => "\u{f185}",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = InvalidThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(InvalidThemeError(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Capabilities
// =============================================================================

/// Read/write access to the document root's `data-mode` attribute.
pub trait ModeAttribute {
    fn mode(&self) -> Option<String>;
    fn set_mode(&self, mode: &str);
}

/// Media-query evaluation (`window.matchMedia`).
pub trait ColorSchemeQuery {
    fn matches(&self, query: &str) -> bool;
}

/// Environment the theme store reads from and writes to.
#[derive(Clone, Copy)]
pub struct ThemeEnv<'a> {
    pub root: &'a dyn ModeAttribute,
    pub scheme: &'a dyn ColorSchemeQuery,
    pub storage: &'a dyn StorageProvider,
}

impl ThemeEnv<'_> {
    fn stored_mode(&self, backend: Backend) -> Option<ThemeMode> {
        self.storage
            .storage(backend)?
            .get_item(STORAGE_KEY)?
            .parse()
            .ok()
    }
}

/// Mode reported by the OS/browser, if it reports one.
pub fn detect_system_preference(scheme: &dyn ColorSchemeQuery) -> Option<ThemeMode> {
    [(DARK_QUERY, ThemeMode::Dark), (LIGHT_QUERY, ThemeMode::Light)]
        .into_iter()
        .find(|(query, _)| scheme.matches(query))
        .map(|(_, mode)| mode)
}

/// Mode reported by the OS/browser, defaulting to [`ThemeMode::Light`].
pub fn system_preference(scheme: &dyn ColorSchemeQuery) -> ThemeMode {
    detect_system_preference(scheme).unwrap_or_default()
}

// =============================================================================
// ThemeStore
// =============================================================================

/// Callback invoked after a theme has been applied and persisted.
pub type OnCommit<'a> = &'a dyn Fn(&ThemeStore);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStore {
    theme: ThemeMode,
}

impl ThemeStore {
    /// Creates a store from a mode name (`"dark"` or `"light"`).
    #[allow(dead_code)]
    pub fn new(theme: &str) -> Result<Self, InvalidThemeError> {
        Ok(Self::from_mode(theme.parse()?))
    }

    pub fn from_mode(theme: ThemeMode) -> Self {
        Self { theme }
    }

    /// Resolves the initial theme.
    ///
    /// Sources, first valid value wins: root `data-mode` attribute, the
    /// `priority` backend (session when `None`), the other backend, the
    /// system preference, then [`ThemeMode::Light`].
    pub fn from_existing(env: &ThemeEnv, priority: Option<Backend>) -> Self {
        let primary = priority.unwrap_or(Backend::Session);

        let theme = env
            .root
            .mode()
            .and_then(|mode| mode.parse().ok())
            .or_else(|| env.stored_mode(primary))
            .or_else(|| env.stored_mode(primary.other()))
            .unwrap_or_else(|| system_preference(env.scheme));

        Self::from_mode(theme)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// A store holding the other mode. No side effects.
    pub fn opposite(&self) -> Self {
        Self::from_mode(self.theme.opposite())
    }

    /// Applies the theme to the page, persists it to `backend` if given,
    /// then calls `on_commit`.
    pub fn set(self, env: &ThemeEnv, backend: Option<Backend>, on_commit: Option<OnCommit>) -> Self {
        env.root.set_mode(self.theme.as_str());

        if let Some(backend) = backend {
            match env.storage.storage(backend) {
                Some(store) => {
                    if let Err(e) = store.set_item(STORAGE_KEY, self.theme.as_str()) {
                        tracing::warn!(%backend, error = %e, "failed to persist theme");
                    }
                }
                None => tracing::warn!(%backend, "storage unavailable, theme not persisted"),
            }
        }

        if let Some(callback) = on_commit {
            callback(&self);
        }

        self
    }

    /// Switches to the opposite theme and applies it like [`ThemeStore::set`].
    pub fn reverse(&self, env: &ThemeEnv, backend: Option<Backend>, on_commit: Option<OnCommit>) -> Self {
        self.opposite().set(env, backend, on_commit)
    }
}
