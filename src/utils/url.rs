//! Site link utilities.
//!
//! Pages are authored with `.html` links so they work from a local file
//! server; the deployed site serves clean URLs.

/// Whether `href` points inside this site (not another origin, not a
/// `mailto:` or in-page anchor).
pub fn is_site_link(href: &str) -> bool {
    let href = href.trim();
    !(href.is_empty()
        || href.starts_with('#')
        || href.starts_with("//")
        || href.contains("://")
        || href.starts_with("mailto:"))
}

/// Splits `href` into its path and the `?query` / `#fragment` suffix.
fn split_path(href: &str) -> (&str, &str) {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    href.split_at(end)
}

/// Removes the `.html` extension from a site link (`index.html` entirely).
///
/// A bare relative `index.html` becomes `./` so it still names the
/// directory. External links are returned unchanged.
pub fn strip_html_suffix(href: &str) -> String {
    if !is_site_link(href) {
        return href.to_string();
    }
    let (path, suffix) = split_path(href);
    let path = path
        .strip_suffix("index.html")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path);
    let path = if path.is_empty() { "./" } else { path };
    format!("{path}{suffix}")
}

/// Whether `href` is the page at `current_path` (with or without `.html`).
pub fn is_current_page(current_path: &str, href: &str) -> bool {
    is_site_link(href)
        && strip_html_suffix(split_path(href).0) == strip_html_suffix(current_path)
}

/// Whether the navbar entry `href` should be highlighted on `current_path`.
///
/// A section is active for any page below it: `/projects/index.html` is
/// active on `/projects/foo.html`.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    if !is_site_link(href) {
        return false;
    }
    let path = split_path(href).0;
    let stem = path.split('.').next().unwrap_or(path);
    let section = stem.strip_suffix("index").unwrap_or(stem);
    let section = if section.is_empty() { "/" } else { section };
    current_path.starts_with(section)
}
