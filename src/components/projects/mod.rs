//! Expandable project cards.
//!
//! Each card shows its title and language bar; clicking the card body
//! expands or collapses the details. A URL hash equal to a card's id opens
//! that card, both on load and on `hashchange`.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::LanguageBar;
use crate::config::{GITHUB_USERNAME, PROJECTS};
use crate::models::Project;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/projects/projects.module.css");

/// Whether a click landed on a link (links navigate, they don't toggle).
fn clicked_link(event: &ev::MouseEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("a"))
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let open = RwSignal::new(project.is_targeted_by(&dom::current_hash()));

    let hashchange = window_event_listener(ev::hashchange, move |_| {
        if project.is_targeted_by(&dom::current_hash()) {
            open.set(true);
        }
    });
    on_cleanup(move || hashchange.remove());

    let toggle = move |event: ev::MouseEvent| {
        if !clicked_link(&event) {
            open.update(|o| *o = !*o);
        }
    };

    let card_class = move || {
        if open.get() {
            format!("{} {}", css::card, css::open)
        } else {
            css::card.to_string()
        }
    };

    view! {
        <article id=project.id class=card_class>
            <header class=css::summary on:click=toggle>
                <h1>{project.title}</h1>
            </header>
            <div class=css::content on:click=toggle>
                <a href=project.repo_url(GITHUB_USERNAME) target="_blank" rel="noopener">
                    {format!("github.com/{}/{}", GITHUB_USERNAME, project.repo)}
                </a>
            </div>
            <LanguageBar repo=project.repo />
        </article>
    }
}

/// All configured project cards.
#[component]
pub fn ProjectCards() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|&project| view! { <ProjectCard project=project /> })
        .collect_view();

    view! { <section class=css::projects>{cards}</section> }
}
