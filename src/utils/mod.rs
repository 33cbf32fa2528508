//! Browser-facing utilities.
//!
//! Provides:
//! - [`BrowserTransport`] - Fetch API transport for the request cache
//! - [`BrowserStorages`] - `sessionStorage` / `localStorage` backends
//! - [`dom`] - Window/document access and theme capabilities
//! - [`logging`] - `tracing` output to the browser console
//! - [`url`] - Site link rewriting and navbar highlighting

pub mod dom;
mod fetch;
pub mod logging;
mod storage;
pub mod url;

pub use fetch::BrowserTransport;
pub use storage::BrowserStorages;
