//! Read and wishlist tracking over a key-value storage backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps two JSON string arrays in `localStorage`, one for books
//! marked read and one for wishlisted books. [`InteractionStore`] owns the
//! rules for adding to them; the storage itself is injected so the client
//! can pass `localStorage` and tests can pass [`MemoryStorage`].
//!
//! Every action is a synchronous read-modify-write with no yield point, so
//! two actions can never interleave on a single-threaded event loop.

#[cfg(test)]
#[path = "interactions_test.rs"]
mod interactions_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::book::BookId;

pub const DEFAULT_READ_KEY: &str = "read-books";
pub const DEFAULT_WISHLIST_KEY: &str = "wishlisted-books";

pub const READ_ADDED: &str = "Book added to 'Read Books' successfully.";
pub const READ_DUPLICATE: &str = "Book is already added to 'Read Books'.";
pub const READ_SAVE_FAILED: &str = "Could not save 'Read Books'.";
pub const WISHLIST_ADDED: &str = "The book is added to 'Wishlist' successfully.";
pub const WISHLIST_DUPLICATE: &str = "The book is already added to 'Wishlist'.";
pub const WISHLIST_ALREADY_READ: &str = "This Book is Already Read.";
pub const WISHLIST_SAVE_FAILED: &str = "Could not save 'Wishlist'.";

/// Error raised by a [`StorageBackend`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists (private mode, non-browser build).
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    /// Quota exceeded or the browser refused the write.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key-value storage with `localStorage` semantics.
pub trait StorageBackend {
    /// Value under `key`, or `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the storage area cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, used to exercise the store without a browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with an already-serialized value.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Raw stored string, bypassing parsing.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The two storage keys, one per identifier list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub read: String,
    pub wishlist: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { read: DEFAULT_READ_KEY.to_owned(), wishlist: DEFAULT_WISHLIST_KEY.to_owned() }
    }
}

/// Notification severity, mapped to toast styling by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// User-facing outcome of an interaction action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }
}

/// Read/wishlist identifier lists persisted through `S`.
///
/// Lists start empty, grow one identifier at a time, and are never pruned.
/// A read book can never be wishlisted; a wishlisted book may still be
/// marked read.
#[derive(Clone, Debug)]
pub struct InteractionStore<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: StorageBackend> InteractionStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    pub fn read_ids(&self) -> Vec<BookId> {
        self.load(&self.keys.read)
    }

    pub fn wishlisted_ids(&self) -> Vec<BookId> {
        self.load(&self.keys.wishlist)
    }

    pub fn is_read(&self, id: &BookId) -> bool {
        self.read_ids().contains(id)
    }

    pub fn is_wishlisted(&self, id: &BookId) -> bool {
        self.wishlisted_ids().contains(id)
    }

    /// Add `id` to the read list unless it is already there.
    pub fn mark_read(&self, id: &BookId) -> Notice {
        let mut read = self.read_ids();
        if read.contains(id) {
            return Notice::warning(READ_DUPLICATE);
        }

        read.push(id.clone());
        match self.save(&self.keys.read, &read) {
            Ok(()) => Notice::success(READ_ADDED),
            Err(e) => {
                log::warn!("failed to persist read list with {id}: {e}");
                Notice::error(READ_SAVE_FAILED)
            }
        }
    }

    /// Add `id` to the wishlist unless it is read or already wishlisted.
    pub fn add_to_wishlist(&self, id: &BookId) -> Notice {
        if self.is_read(id) {
            return Notice::error(WISHLIST_ALREADY_READ);
        }

        let mut wishlisted = self.wishlisted_ids();
        if wishlisted.contains(id) {
            return Notice::warning(WISHLIST_DUPLICATE);
        }

        wishlisted.push(id.clone());
        match self.save(&self.keys.wishlist, &wishlisted) {
            Ok(()) => Notice::success(WISHLIST_ADDED),
            Err(e) => {
                log::warn!("failed to persist wishlist with {id}: {e}");
                Notice::error(WISHLIST_SAVE_FAILED)
            }
        }
    }

    /// Parse the list under `key`, treating absence or garbage as empty.
    fn load(&self, key: &str) -> Vec<BookId> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("reading {key}: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("discarding unreadable {key} list: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, key: &str, ids: &[BookId]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(ids).map_err(|e| StorageError::Write(e.to_string()))?;
        self.storage.set_item(key, &raw)
    }
}
