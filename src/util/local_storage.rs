//! `localStorage`-backed [`StorageBackend`] for the interaction store.
//!
//! The storage area is looked up on every call instead of being held, so
//! the backend is a zero-sized `Send + Sync` value that can live in Leptos
//! context. Outside the browser every call reports
//! [`StorageError::Unavailable`].

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use catalog::{StorageBackend, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
