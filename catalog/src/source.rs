//! Catalog loading and lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is a static JSON array bundled with the site. Callers load it
//! through a [`CatalogSource`] so the detail view can be driven by the real
//! HTTP fetch in the browser and by in-memory fixtures in tests.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::future::Future;

use crate::book::{BookId, BookRecord};

/// Error returned when the catalog resource cannot be obtained.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    /// The server answered with a non-success status.
    #[error("catalog request failed: {0}")]
    Status(u16),
    /// The body was not a JSON array of book records.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// No catalog transport exists in this build.
    #[error("catalog not available outside the browser")]
    Unavailable,
}

/// Read-only collection of book records in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    /// Parse the bundled JSON document.
    ///
    /// Entries without a usable `bookId` are skipped with a warning; the
    /// rest of the catalog still loads.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when `raw` is not a JSON array.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
        let mut books = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<BookRecord>(entry) {
                Ok(book) => books.push(book),
                Err(e) => log::warn!("skipping catalog entry {index}: {e}"),
            }
        }
        Ok(Self { books })
    }

    /// First record whose identifier equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| &book.id == id)
    }

    #[must_use]
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Anything that can produce the catalog asynchronously.
///
/// Loading is one-shot and non-cancelable; callers own retry policy (the
/// client has none).
pub trait CatalogSource {
    fn load(&self) -> impl Future<Output = Result<Catalog, CatalogError>>;
}

/// Source backed by an in-memory JSON document.
///
/// Used for fixtures and for builds that embed the catalog.
#[derive(Clone, Debug)]
pub struct StaticCatalogSource {
    raw: String,
}

impl StaticCatalogSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_json(&self.raw)
    }
}
