//! Key-value storage capabilities.
//!
//! The fetch cache and the theme store never reach for `window.sessionStorage`
//! or `window.localStorage` directly. They receive a [`StorageProvider`] and
//! select a [`Backend`] per call, which keeps them testable natively with
//! [`MemoryStorage`].

use std::fmt;

use crate::core::error::StorageError;

/// Named storage scope, distinguished by retention lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Cleared when the tab/window is closed.
    Session,
    /// Survives browser restarts.
    Local,
}

impl Backend {
    /// The other storage scope.
    pub fn other(self) -> Self {
        match self {
            Self::Session => Self::Local,
            Self::Local => Self::Session,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => write!(f, "session"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// A string-only key-value store (the Web Storage contract).
pub trait Storage {
    /// Returns the stored value, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Resolves a [`Backend`] to a concrete store.
///
/// Returns `None` when the backend is unavailable (e.g. storage disabled
/// by browser privacy settings).
pub trait StorageProvider {
    fn storage(&self, backend: Backend) -> Option<&dyn Storage>;
}

#[cfg(test)]
pub use memory::{MemoryStorage, MemoryStorages};

#[cfg(test)]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{Backend, Storage, StorageProvider};
    use crate::core::error::StorageError;

    /// In-memory [`Storage`] used in place of browser storage.
    #[derive(Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
        reject_writes: Cell<bool>,
    }

    impl MemoryStorage {
        /// Number of stored entries.
        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        /// Makes every subsequent `set_item` fail, like a full quota.
        pub fn reject_writes(&self) {
            self.reject_writes.set(true);
        }
    }

    impl Storage for MemoryStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.reject_writes.get() {
                return Err(StorageError::WriteFailed);
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Session + local pair of [`MemoryStorage`].
    #[derive(Default)]
    pub struct MemoryStorages {
        pub session: MemoryStorage,
        pub local: MemoryStorage,
    }

    impl StorageProvider for MemoryStorages {
        fn storage(&self, backend: Backend) -> Option<&dyn Storage> {
            match backend {
                Backend::Session => Some(&self.session),
                Backend::Local => Some(&self.local),
            }
        }
    }
}
