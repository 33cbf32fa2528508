//! Core logic for the site bundle.
//!
//! This module provides:
//! - [`CachedFetcher`] storage-backed request caching over a [`Transport`]
//! - [`ThemeStore`] dark/light state with [`ThemeEnv`] capabilities
//! - [`languages`] GitHub language statistics and bar layout
//! - [`codeblock`] highlighter language resolution
//! - [`copy`] copy-to-clipboard sources

pub mod codeblock;
pub mod copy;
pub mod error;
pub mod fetch;
pub mod languages;
pub mod storage;
pub mod theme;

pub use fetch::CachedFetcher;
pub use storage::Backend;
pub use theme::{ColorSchemeQuery, ModeAttribute, ThemeEnv, ThemeMode, ThemeStore};
