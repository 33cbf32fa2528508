//! Copy-to-clipboard sources.
//!
//! A copy action either carries its text inline or names a site file whose
//! contents are copied. File contents go through the session cache, so
//! repeated copies of one file cost a single request.

use crate::config::copy::COPIED_LABEL;
use crate::core::error::FetchError;
use crate::core::fetch::{CachedFetcher, RequestOptions, Transport};
use crate::core::storage::{Backend, StorageProvider};

/// What a copy button puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySource {
    /// Literal text.
    Text(&'static str),
    /// Body of the file at this URL.
    Remote(&'static str),
}

impl CopySource {
    /// Resolves the text to copy.
    pub async fn resolve<T, S>(self, fetcher: &CachedFetcher<T, S>) -> Result<String, FetchError>
    where
        T: Transport,
        S: StorageProvider,
    {
        match self {
            Self::Text(text) => Ok(text.to_string()),
            Self::Remote(src) => {
                fetcher
                    .get_text(src, &RequestOptions::default(), Some(Backend::Session))
                    .await
            }
        }
    }
}

/// Button label: `idle` normally, the confirmation right after a copy.
pub fn copy_label(idle: &'static str, copied: bool) -> &'static str {
    if copied { COPIED_LABEL } else { idle }
}
