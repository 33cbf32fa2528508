//! Copy-to-clipboard button.
//!
//! Shows "copied!" for a second after a successful copy. Failures (missing
//! file, clipboard permission) are logged and leave the label unchanged.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::fetcher;
use crate::config::copy::FEEDBACK_MS;
use crate::core::copy::{CopySource, copy_label};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/copy/copy.module.css");

#[component]
pub fn CopyButton(source: CopySource, label: &'static str) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_click = move |_| {
        if copied.get_untracked() {
            return;
        }
        spawn_local(async move {
            let text = match source.resolve(&fetcher()).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(?source, error = %e, "failed to load copy source");
                    return;
                }
            };

            if dom::write_clipboard(&text).await {
                copied.set(true);
                set_timeout(move || copied.set(false), Duration::from_millis(FEEDBACK_MS));
            } else {
                tracing::warn!(?source, "clipboard write rejected");
            }
        });
    };

    view! {
        <button class=css::copy on:click=on_click title="copy to clipboard">
            {move || copy_label(label, copied.get())}
        </button>
    }
}
