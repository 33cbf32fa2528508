//! GitHub language widgets.
//!
//! - [`LanguageBar`] - stacked per-repo bar on project cards
//! - [`AboutLanguages`] - account-wide breakdown on the about page
//!
//! Both fetch through the session cache; a failed request leaves the widget
//! empty and logs a warning.

use leptos::prelude::*;

use crate::app::fetcher;
use crate::config::GITHUB_USERNAME;
use crate::core::languages::{
    BarSegment, LanguageShare, bar_segments, css_class_name, normalize_percentages,
    repo_languages, user_languages,
};

stylance::import_crate_style!(css, "src/components/languages/languages.module.css");

#[component]
fn Segments(segments: Vec<BarSegment>) -> impl IntoView {
    segments
        .into_iter()
        .map(|segment| {
            view! {
                <div
                    class=format!("{} {}", segment.class_name, css::segment)
                    style:width=format!("{}%", segment.width)
                    style:left=format!("{}%", segment.left)
                    style:z-index=segment.z_index.to_string()
                    data-tooltip=segment.tooltip
                    aria-label=segment.name
                ></div>
            }
        })
        .collect_view()
}

/// Stacked language bar for one repository.
#[component]
pub fn LanguageBar(repo: &'static str) -> impl IntoView {
    let segments = LocalResource::new(move || async move {
        match repo_languages(&fetcher(), GITHUB_USERNAME, repo, None).await {
            Ok(shares) => bar_segments(&shares, 0),
            Err(e) => {
                tracing::warn!(repo, status = ?e.status(), error = %e, "failed to load repo languages");
                Vec::new()
            }
        }
    });

    view! {
        <div class=css::bar>
            <Suspense fallback=|| ()>
                {move || segments.get().map(|segments| view! { <Segments segments=segments /> })}
            </Suspense>
        </div>
    }
}

/// Language breakdown across every non-fork repository.
#[component]
pub fn AboutLanguages() -> impl IntoView {
    let shares = LocalResource::new(move || async move {
        match user_languages(&fetcher(), GITHUB_USERNAME, None).await {
            Ok(weights) => normalize_percentages(&weights),
            Err(e) => {
                tracing::warn!(user = GITHUB_USERNAME, error = %e, "failed to load languages");
                Vec::new()
            }
        }
    });

    let rows = move |shares: Vec<LanguageShare>| {
        shares
            .into_iter()
            .map(|share| {
                let swatch = format!("{}-bg {}", css_class_name(&share.name), css::swatch);
                view! {
                    <li class=css::row>
                        <span class=swatch></span>
                        <span class=css::name>{share.name.to_lowercase()}</span>
                        <span class=css::percent>{format!("{:.1}%", share.percent)}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class=css::about>
            <h2>"languages"</h2>
            <Suspense fallback=move || view! { <p class=css::loading>"Loading..."</p> }>
                {move || shares.get().map(|shares| {
                    let segments = bar_segments(&shares, 0);
                    view! {
                        <div class=css::bar><Segments segments=segments /></div>
                        <ul class=css::list>{rows(shares)}</ul>
                    }
                })}
            </Suspense>
        </section>
    }
}
