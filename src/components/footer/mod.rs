//! Site footer with the source-repo credit and social links.

use leptos::prelude::*;

use crate::components::CopyButton;
use crate::config::{CONTACT_EMAIL, FOOTER_LINKS, SITE_REPO_URL};
use crate::core::copy::CopySource;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let links = FOOTER_LINKS
        .iter()
        .map(|&(glyph, href)| {
            view! {
                <a href=href target="_blank" rel="noopener">{glyph}</a>
            }
        })
        .collect_view();

    view! {
        <footer class=css::footer>
            <div>
                "designed by me and hosted in "
                <a href=SITE_REPO_URL target="_blank" rel="noopener">"this repo"</a>
                "."
            </div>
            <div class=format!("fa {}", css::links)>{links}</div>
            <CopyButton source=CopySource::Text(CONTACT_EMAIL) label="copy email" />
        </footer>
    }
}
