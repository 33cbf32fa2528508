//! Web Storage backends.
//!
//! `sessionStorage` is cleared when the tab/window is closed; `localStorage`
//! survives restarts. Either may be missing (private browsing, storage
//! disabled), in which case [`BrowserStorages::storage`] returns `None`.

use crate::core::error::StorageError;
use crate::core::storage::{Backend, Storage, StorageProvider};

use super::dom;

impl Storage for web_sys::Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        web_sys::Storage::get_item(self, key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        web_sys::Storage::set_item(self, key, value).map_err(|_| StorageError::WriteFailed)
    }
}

/// `sessionStorage` / `localStorage` handles, resolved once.
#[derive(Clone, Default)]
pub struct BrowserStorages {
    session: Option<web_sys::Storage>,
    local: Option<web_sys::Storage>,
}

impl BrowserStorages {
    pub fn new() -> Self {
        Self {
            session: dom::session_storage(),
            local: dom::local_storage(),
        }
    }
}

impl StorageProvider for BrowserStorages {
    fn storage(&self, backend: Backend) -> Option<&dyn Storage> {
        let storage = match backend {
            Backend::Session => self.session.as_ref(),
            Backend::Local => self.local.as_ref(),
        };
        storage.map(|s| s as &dyn Storage)
    }
}
