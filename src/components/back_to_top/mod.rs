//! Floating back-to-top button, shown once the page is scrolled.

use leptos::ev;
use leptos::prelude::*;

use crate::config::BACK_TO_TOP_THRESHOLD_PX;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/back_to_top/back_to_top.module.css");

/// Whether the button should be visible at this scroll offset.
fn is_scrolled_past(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(is_scrolled_past(dom::scroll_y()));

    let scroll = window_event_listener(ev::scroll, move |_| {
        let past = is_scrolled_past(dom::scroll_y());
        if visible.get_untracked() != past {
            visible.set(past);
        }
    });
    on_cleanup(move || scroll.remove());

    view! {
        <button
            id="back2top"
            class=format!("fa {}", css::button)
            style:display=move || if visible.get() { "block" } else { "none" }
            on:click=|_| dom::scroll_to_top()
            title="back to top"
            aria-label="Back to top"
        >
            "\u{f062}"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_near_top() {
        assert!(!is_scrolled_past(0.0));
        assert!(!is_scrolled_past(BACK_TO_TOP_THRESHOLD_PX));
    }

    #[test]
    fn test_shown_past_threshold() {
        assert!(is_scrolled_past(BACK_TO_TOP_THRESHOLD_PX + 1.0));
        assert!(is_scrolled_past(2400.0));
    }
}
