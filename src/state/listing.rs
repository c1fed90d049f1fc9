//! Home-page catalog listing state.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use catalog::{BookRecord, Catalog, CatalogError};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingState {
    #[default]
    Loading,
    Loaded(Vec<BookRecord>),
    Failed,
}

impl ListingState {
    /// Collapse a catalog load into a renderable state, logging failures.
    pub fn from_load(result: Result<Catalog, CatalogError>) -> Self {
        match result {
            Ok(catalog) => Self::Loaded(catalog.books().to_vec()),
            Err(e) => {
                log::error!("error fetching books: {e}");
                Self::Failed
            }
        }
    }
}
