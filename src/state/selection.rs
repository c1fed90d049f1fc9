//! In-memory navigation payload from the listing page to the detail page.
//!
//! Clicking a card stores the full record here before the router navigates,
//! letting the detail page skip a second catalog fetch. The payload is only
//! honored when its id matches the route.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use catalog::{BookId, BookRecord};

#[derive(Clone, Debug, Default)]
pub struct SelectedBook {
    pub book: Option<BookRecord>,
}

impl SelectedBook {
    pub fn select(&mut self, book: BookRecord) {
        self.book = Some(book);
    }

    /// The stored record if it belongs to `id`.
    #[must_use]
    pub fn matching(&self, id: &BookId) -> Option<BookRecord> {
        self.book.as_ref().filter(|b| &b.id == id).cloned()
    }
}
