//! Site navbar.
//!
//! Title link, section menu (collapsible below the mobile breakpoint), and
//! the dark/light mode toggle.
//!
//! ## Behavior
//!
//! - The toggle glyph follows [`AppContext::theme`]; clicking it reverses the
//!   theme and persists it to `localStorage`.
//! - The section containing the current page is highlighted; the link to
//!   the current page itself becomes `#`.
//! - The mobile menu closes on any click outside the navbar and when the
//!   viewport grows past the breakpoint.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::config::{NAV_LINKS, SITE_TITLE};
use crate::utils::dom;
use crate::utils::url::{is_active_link, is_current_page};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let menu_open = RwSignal::new(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let current_path = dom::current_path();

    let resize = window_event_listener(ev::resize, move |_| {
        if menu_open.get_untracked() && !dom::is_mobile() {
            menu_open.set(false);
        }
    });

    let outside_click = window_event_listener(ev::click, move |event| {
        if !menu_open.get_untracked() {
            return;
        }
        let inside = nav_ref.get_untracked().is_some_and(|nav| {
            event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| nav.contains(Some(&node)))
        });
        if !inside {
            menu_open.set(false);
        }
    });

    on_cleanup(move || {
        resize.remove();
        outside_click.remove();
    });

    let icon = move || ctx.theme.get().icon();
    let toggle_title = move || format!("switch to {} mode", ctx.theme.get().opposite());
    let menu_class = move || {
        if menu_open.get() {
            format!("{} {}", css::menu, css::menuOpen)
        } else {
            css::menu.to_string()
        }
    };

    let links = NAV_LINKS
        .iter()
        .map(|&(label, href)| {
            let class = if is_active_link(&current_path, href) {
                css::active
            } else {
                ""
            };
            let href = if is_current_page(&current_path, href) {
                "#"
            } else {
                href
            };
            view! {
                <li>
                    <a class=class href=href>{label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=css::nav node_ref=nav_ref>
            <div class=css::title>
                <a href="/index.html">{SITE_TITLE}</a>
            </div>
            <button
                class=css::menuButton
                on:click=move |_| menu_open.update(|open| *open = !*open)
                aria-label="Toggle menu"
            >
                <span class=css::menuIcon></span>
            </button>
            <button
                class=format!("fa {}", css::modeToggle)
                on:click=move |_| ctx.toggle_theme()
                title=toggle_title
                aria-label="Toggle color theme"
            >
                {icon}
            </button>
            <ul class=menu_class>{links}</ul>
        </nav>
    }
}
