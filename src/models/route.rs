//! Page identification from the URL path.
//!
//! Each static page of the site loads the same bundle; the path decides
//! which widgets are mounted and whether the theme is forced.

use crate::utils::url::strip_html_suffix;

/// Site pages, derived from `location.pathname`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Landing page: `/` or `/index.html`
    Home,
    /// `/about.html`
    About,
    /// `/projects/...`
    Projects,
    /// `/etc/...`
    Etc,
    /// Any other page (only the navbar and footer are mounted)
    Other,
}

impl Page {
    /// Parse a pathname into a Page.
    pub fn from_path(path: &str) -> Self {
        let path = strip_html_suffix(path);
        let path = path.trim_end_matches('/');

        match path {
            "" => Self::Home,
            "/about" => Self::About,
            p if p == "/projects" || p.starts_with("/projects/") => Self::Projects,
            p if p == "/etc" || p.starts_with("/etc/") => Self::Etc,
            _ => Self::Other,
        }
    }

    /// Get the current page from the browser URL.
    pub fn current() -> Self {
        Self::from_path(&crate::utils::dom::current_path())
    }

    /// The landing page always renders dark and never persists it.
    pub fn forces_dark(self) -> bool {
        self == Self::Home
    }
}
