//! UI components built with Leptos.
//!
//! - [`navbar`] - Site navbar with the theme toggle
//! - [`footer`] - Footer credit and social links
//! - [`languages`] - GitHub language bar and about-page breakdown
//! - [`projects`] - Expandable project cards
//! - [`codeblock`] - Highlighted source code blocks
//! - [`copy`] - Copy-to-clipboard button
//! - [`back_to_top`] - Scroll-to-top button

pub mod back_to_top;
pub mod codeblock;
pub mod copy;
pub mod footer;
pub mod languages;
pub mod navbar;
pub mod projects;

pub use back_to_top::BackToTop;
pub use codeblock::CodeBlocks;
pub use copy::CopyButton;
pub use footer::Footer;
pub use languages::{AboutLanguages, LanguageBar};
pub use navbar::Navbar;
pub use projects::ProjectCards;
