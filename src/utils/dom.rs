//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling,
//! plus the browser implementations of the theme capabilities.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Storage, Window};

use crate::config::theme::MODE_ATTRIBUTE;
use crate::config::{LOCAL_HOSTS, MOBILE_BREAKPOINT_PX};
use crate::core::{ColorSchemeQuery, ModeAttribute};
use crate::utils::url::strip_html_suffix;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Check if the viewport is below the mobile breakpoint.
pub fn is_mobile() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|width| width < MOBILE_BREAKPOINT_PX)
}

/// Current `location.pathname`, `/` if unavailable.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Get the current URL hash (without the '#' prefix).
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Vertical scroll offset of the window, `0` if unavailable.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Writes `text` to the system clipboard. Returns `false` if the browser
/// rejected the write (no permission, insecure context).
pub async fn write_clipboard(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
}

/// Current `location.hostname`.
pub fn current_host() -> String {
    window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

// =============================================================================
// Theme capabilities
// =============================================================================

/// The `<html>` element's `data-mode` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<Element> {
        document()?.document_element()
    }
}

impl ModeAttribute for DocumentRoot {
    fn mode(&self) -> Option<String> {
        Self::element()?
            .get_attribute(MODE_ATTRIBUTE)
            .filter(|mode| !mode.is_empty())
    }

    fn set_mode(&self, mode: &str) {
        let Some(root) = Self::element() else {
            tracing::warn!("document root not available");
            return;
        };
        if root.set_attribute(MODE_ATTRIBUTE, mode).is_err() {
            tracing::warn!(mode, "failed to set {MODE_ATTRIBUTE}");
        }
    }
}

/// `window.matchMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueries;

impl ColorSchemeQuery for MediaQueries {
    fn matches(&self, query: &str) -> bool {
        window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .is_some_and(|list| list.matches())
    }
}

// =============================================================================
// Document helpers
// =============================================================================

/// Strips `.html` from every site link, unless served from a local host.
pub fn rewrite_site_links() {
    if LOCAL_HOSTS.contains(&current_host().as_str()) {
        return;
    }
    let Some(anchors) = document().and_then(|d| d.query_selector_all("a[href]").ok()) else {
        return;
    };

    for i in 0..anchors.length() {
        if let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<Element>().ok())
            && let Some(href) = anchor.get_attribute("href")
        {
            let stripped = strip_html_suffix(&href);
            if stripped != href {
                let _ = anchor.set_attribute("href", &stripped);
            }
        }
    }
}

/// Appends `<script src=...>` to `<head>` unless already present, running
/// `on_load` once the script has loaded.
///
/// Returns `false` if the script was already present (`on_load` is not run).
pub fn ensure_script(src: &str, on_load: impl FnOnce() + 'static) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(head) = document.head() else {
        return false;
    };

    let selector = format!("script[src=\"{src}\"]");
    if document.query_selector(&selector).ok().flatten().is_some() {
        return false;
    }

    let Ok(script) = document.create_element("script") else {
        return false;
    };
    let _ = script.set_attribute("src", src);
    let _ = script.set_attribute("type", "text/javascript");

    let callback = Closure::once_into_js(on_load);
    let _ = script.add_event_listener_with_callback("load", callback.unchecked_ref());

    head.append_child(&script).is_ok()
}
