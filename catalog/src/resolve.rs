//! Detail-view resolution: turn a route identifier into a book record.
//!
//! DESIGN
//! ======
//! A record handed forward by the listing page is used as-is. Otherwise the
//! catalog is loaded once and searched. Load failures are logged and
//! collapse into [`DetailState::NotFound`]; the view never distinguishes a
//! broken fetch from a missing identifier.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use crate::book::{BookId, BookRecord};
use crate::source::CatalogSource;

/// Observable states of the detail view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded(BookRecord),
    NotFound,
}

impl DetailState {
    /// State to render before any loading happens.
    ///
    /// A payload whose identifier differs from the route is ignored.
    #[must_use]
    pub fn initial(id: Option<&BookId>, preloaded: Option<BookRecord>) -> Self {
        match (id, preloaded) {
            (None, _) => Self::NotFound,
            (Some(id), Some(book)) if &book.id == id => Self::Loaded(book),
            (Some(_), _) => Self::Loading,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn book(&self) -> Option<&BookRecord> {
        match self {
            Self::Loaded(book) => Some(book),
            Self::Loading | Self::NotFound => None,
        }
    }
}

/// Resolve the record for `id`, preferring `preloaded` when it matches.
///
/// Only touches `source` when no usable payload was passed forward.
pub async fn resolve_detail<S: CatalogSource>(
    source: &S,
    id: &BookId,
    preloaded: Option<BookRecord>,
) -> DetailState {
    let state = DetailState::initial(Some(id), preloaded);
    if !state.is_loading() {
        return state;
    }

    match source.load().await {
        Ok(catalog) => match catalog.find_by_id(id) {
            Some(book) => DetailState::Loaded(book.clone()),
            None => {
                log::info!("book {id} not in catalog ({} records)", catalog.len());
                DetailState::NotFound
            }
        },
        Err(e) => {
            log::error!("error fetching book details for {id}: {e}");
            DetailState::NotFound
        }
    }
}

/// Decide whether a finished resolution for `requested` may be shown.
///
/// `current` is the route's id when the result arrives, or `None` once the
/// route is gone. Results for any other id are dropped.
#[must_use]
pub fn accept_for_route(current: Option<&BookId>, requested: &BookId, state: DetailState) -> Option<DetailState> {
    if current == Some(requested) {
        Some(state)
    } else {
        log::debug!("dropping stale detail result for {requested}");
        None
    }
}
