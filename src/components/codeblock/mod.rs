//! Highlighted source code blocks.
//!
//! Source files are fetched as plain text (uncached) and rendered into
//! `<pre><code>`; highlight.js, loaded by the page, does the coloring. When a
//! language is known its pack is appended to `<head>` first.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::fetcher;
use crate::components::CopyButton;
use crate::config::SNIPPETS;
use crate::core::codeblock::{highlighter_script_url, resolve_language};
use crate::core::copy::CopySource;
use crate::core::fetch::RequestOptions;
use crate::models::Snippet;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/codeblock/codeblock.module.css");

/// Calls `hljs.highlightElement(element)` if highlight.js is loaded.
fn highlight(element: &web_sys::Element) {
    let Some(window) = dom::window() else {
        return;
    };
    let highlight_fn = js_sys::Reflect::get(&window, &"hljs".into())
        .ok()
        .filter(|hljs| !hljs.is_undefined())
        .and_then(|hljs| {
            js_sys::Reflect::get(&hljs, &"highlightElement".into())
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
                .map(|f| (hljs, f))
        });

    match highlight_fn {
        Some((hljs, f)) => {
            if let Err(e) = f.call1(&hljs, element.as_ref()) {
                tracing::warn!(error = ?e, "highlightElement failed");
            }
        }
        None => tracing::debug!("highlight.js not loaded"),
    }
}

/// Loads the language pack if needed, then highlights `element`.
fn highlight_with(element: web_sys::Element, language: Option<String>) {
    let Some(language) = language else {
        highlight(&element);
        return;
    };

    let deferred = element.clone();
    if !dom::ensure_script(&highlighter_script_url(&language), move || highlight(&deferred)) {
        highlight(&element);
    }
}

#[component]
fn CodeBlock(snippet: Snippet) -> impl IntoView {
    let language = resolve_language(snippet.language, snippet.src);
    let code_ref = NodeRef::<leptos::html::Code>::new();

    let source = LocalResource::new(move || async move {
        fetcher()
            .get_text(snippet.src, &RequestOptions::default(), None)
            .await
            .map_err(|e| e.to_string())
    });

    let code_class = match &language {
        Some(language) => format!("hljs code-font language-{language}"),
        None => "hljs code-font".to_string(),
    };

    Effect::new({
        let language = language.clone();
        move |_| {
            if let Some(Ok(_)) = source.get()
                && let Some(code) = code_ref.get()
            {
                let element: web_sys::Element = code.unchecked_into();
                highlight_with(element, language.clone());
            }
        }
    });

    view! {
        <figure class=css::block>
            <figcaption class=css::caption>
                {snippet.title}
                <CopyButton source=CopySource::Remote(snippet.src) label="copy" />
            </figcaption>
            <Suspense fallback=|| view! { <pre class=css::pre>"Loading..."</pre> }>
                {move || source.get().map(|result| match result {
                    Ok(text) => view! {
                        <pre class=css::pre>
                            <code node_ref=code_ref class=code_class.clone()>{text}</code>
                        </pre>
                    }.into_any(),
                    Err(err) => {
                        tracing::warn!(src = snippet.src, error = %err, "failed to load code block");
                        view! { <pre class=css::error>{err}</pre> }.into_any()
                    }
                })}
            </Suspense>
        </figure>
    }
}

/// All configured code blocks.
#[component]
pub fn CodeBlocks() -> impl IntoView {
    let blocks = SNIPPETS
        .iter()
        .map(|&snippet| view! { <CodeBlock snippet=snippet /> })
        .collect_view();

    view! { <section class=css::blocks>{blocks}</section> }
}
