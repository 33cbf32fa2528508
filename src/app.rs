//! Root application module.
//!
//! Contains the main App component, AppContext definition, and page-load
//! setup (initial theme, link rewriting) following Leptos conventions.

use leptos::prelude::*;

use crate::components::{AboutLanguages, BackToTop, CodeBlocks, Footer, Navbar, ProjectCards};
use crate::core::{Backend, CachedFetcher, ThemeEnv, ThemeMode, ThemeStore};
use crate::models::Page;
use crate::utils::dom::{self, DocumentRoot, MediaQueries};
use crate::utils::{BrowserStorages, BrowserTransport};

/// Request cache over the Fetch API and Web Storage.
pub type BrowserFetcher = CachedFetcher<BrowserTransport, BrowserStorages>;

/// Creates a fetcher bound to the current window's storages.
///
/// Storage handles are not `Send`, so widgets create one per request
/// instead of sharing it through context.
pub fn fetcher() -> BrowserFetcher {
    CachedFetcher::new(BrowserTransport, BrowserStorages::new())
}

/// Runs `f` with a [`ThemeEnv`] over the live document.
fn with_theme_env<R>(f: impl FnOnce(&ThemeEnv) -> R) -> R {
    let storages = BrowserStorages::new();
    let env = ThemeEnv {
        root: &DocumentRoot,
        scheme: &MediaQueries,
        storage: &storages,
    };
    f(&env)
}

/// Applies the page-load theme to `<html data-mode>` without persisting it.
///
/// The landing page is always dark; other pages resolve the theme from
/// the existing attribute, storage, then the system preference.
pub fn apply_initial_theme(page: Page) -> ThemeMode {
    with_theme_env(|env| {
        let store = if page.forces_dark() {
            ThemeStore::from_mode(ThemeMode::Dark)
        } else {
            ThemeStore::from_existing(env, None)
        };
        store.set(env, None, None).theme()
    })
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active theme, mirrored from `<html data-mode>`.
    pub theme: RwSignal<ThemeMode>,
}

impl AppContext {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme: RwSignal::new(theme),
        }
    }

    /// Flips the theme and persists it to `localStorage`.
    ///
    /// Re-reads the current state first, so a mode changed elsewhere on the
    /// page (or in another tab via storage) is respected.
    pub fn toggle_theme(&self) {
        let theme = self.theme;
        let on_commit = move |store: &ThemeStore| theme.set(store.theme());

        with_theme_env(|env| {
            ThemeStore::from_existing(env, Some(Backend::Local)).reverse(
                env,
                Some(Backend::Local),
                Some(&on_commit),
            );
        });
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Applies the initial theme and provides the global AppContext
/// - Renders the navbar, the current page's widgets, the footer, and the
///   back-to-top button
/// - Rewrites site links once mounted
#[component]
pub fn App() -> impl IntoView {
    let page = Page::current();
    let theme = apply_initial_theme(page);
    tracing::debug!(?page, %theme, "initialized page");

    let ctx = AppContext::new(theme);
    provide_context(ctx);

    Effect::new(move |_| dom::rewrite_site_links());

    let content = match page {
        Page::About => view! { <AboutLanguages /> }.into_any(),
        Page::Projects => view! { <ProjectCards /> }.into_any(),
        Page::Etc => view! { <CodeBlocks /> }.into_any(),
        Page::Home | Page::Other => ().into_any(),
    };

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; text-align: center;">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Navbar />
            <main>{content}</main>
            <Footer />
            <BackToTop />
        </ErrorBoundary>
    }
}
