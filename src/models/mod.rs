//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`] - Which site page the bundle is running on
//! - [`Project`], [`Snippet`] - Configured project cards and code blocks

mod project;
mod route;

pub use project::{Project, Snippet};
pub use route::Page;
