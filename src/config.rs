//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Site Metadata
// =============================================================================

/// Site title shown in the navbar.
pub const SITE_TITLE: &str = "johan cho";

/// GitHub account whose repositories feed the language charts.
pub const GITHUB_USERNAME: &str = "tandyx";

/// Repository hosting the site (linked from the footer).
pub const SITE_REPO_URL: &str = "https://github.com/tandyx/tandyx.github.io";

/// Navbar entries as `(label, href)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "/about.html"),
    ("projects", "/projects/index.html"),
    ("etc", "/etc/index.html"),
];

/// Address copied by the footer's copy button.
pub const CONTACT_EMAIL: &str = "cho.joh@northeastern.edu";

/// Footer social links as `(glyph, href)` (Font Awesome code points).
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("\u{f0e0}", "mailto:cho.joh@northeastern.edu"),
    ("\u{f08c}", "https://www.linkedin.com/in/chojohan/"),
    ("\u{f09b}", "https://github.com/tandyx"),
    ("\u{f16a}", "https://www.youtube.com/channel/UCP91LPgRFY03YoIGrmuMH9A"),
    (
        "\u{f1bc}",
        "https://open.spotify.com/user/31rmddg3bkfj4gl56uvbw7225t3y?si=313276f3aff34fc2",
    ),
];

/// Hostnames treated as local development (links keep their `.html`).
pub const LOCAL_HOSTS: &[&str] = &["localhost", "", "127.0.0.1"];

/// Viewport width below which the layout switches to mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 100.0;

// =============================================================================
// Page Content
// =============================================================================

use crate::models::{Project, Snippet};

/// Project cards on the projects page, each with a language bar.
pub const PROJECTS: &[Project] = &[
    Project { id: "mbta_mapper", title: "mbta mapper", repo: "mbta_mapper" },
    Project { id: "teams_bot", title: "teams bot", repo: "teams_bot" },
    Project { id: "linprog", title: "linprog", repo: "linprog" },
    Project { id: "tandypack", title: "tandypack", repo: "tandypack" },
    Project { id: "pwsh", title: "pwsh profile", repo: "pwsh" },
];

/// Code blocks on the etc page.
pub const SNIPPETS: &[Snippet] = &[
    Snippet { title: "powershell profile", src: "/src/code/profile.ps1", language: None },
    Snippet { title: "theme toggle", src: "/src/code/theme.js", language: None },
];

// =============================================================================
// Theme Configuration
// =============================================================================

pub mod theme {
    /// Root element attribute carrying the active mode.
    pub const MODE_ATTRIBUTE: &str = "data-mode";

    /// Storage key for the persisted mode.
    pub const STORAGE_KEY: &str = "theme";

    pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
    pub const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";
}

// =============================================================================
// Copy Buttons
// =============================================================================

pub mod copy {
    /// Label shown right after a successful copy.
    pub const COPIED_LABEL: &str = "copied!";

    /// How long the confirmation label stays up.
    pub const FEEDBACK_MS: u64 = 1000;
}

// =============================================================================
// GitHub API Configuration
// =============================================================================

pub mod github {
    pub const API_BASE: &str = "https://api.github.com";

    /// Notebook byte counts are dominated by embedded output, so they are
    /// scaled down before aggregation.
    pub const NOTEBOOK_LANGUAGE: &str = "Jupyter Notebook";
    pub const NOTEBOOK_WEIGHT: f64 = 0.05;
}

// =============================================================================
// Code Block Configuration
// =============================================================================

pub mod codeblock {
    /// File extensions whose highlighter language name differs.
    pub const EXTENSION_LANGUAGES: &[(&str, &str)] = &[("js", "javascript"), ("ps1", "powershell")];

    /// CDN prefix for highlight.js language packs.
    pub const HIGHLIGHTER_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/languages";
}
