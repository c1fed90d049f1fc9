use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::source::{Catalog, CatalogError, StaticCatalogSource};

// =============================================================
// Helpers
// =============================================================

fn make_book(id: &str, name: &str) -> BookRecord {
    BookRecord {
        id: BookId::from(id),
        name: name.to_owned(),
        author: "Author".to_owned(),
        image: format!("{id}.png"),
        review: "Review".to_owned(),
        total_pages: "100".to_owned(),
        rating: "4.2".to_owned(),
        category: "Fiction".to_owned(),
        tags: vec!["Young Adult".to_owned()],
        publisher: "Publisher".to_owned(),
        year_of_publishing: "2000".to_owned(),
    }
}

/// Counts loads so tests can assert the payload path skips the fetch.
struct CountingSource {
    catalog: Catalog,
    loads: Cell<usize>,
}

impl CountingSource {
    fn new(books: Vec<BookRecord>) -> Self {
        Self { catalog: Catalog::new(books), loads: Cell::new(0) }
    }
}

impl CatalogSource for CountingSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.catalog.clone())
    }
}

struct FailingSource;

impl CatalogSource for FailingSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        Err(CatalogError::Status(500))
    }
}

// =============================================================
// DetailState::initial
// =============================================================

#[test]
fn initial_without_payload_is_loading() {
    assert_eq!(DetailState::initial(Some(&BookId::from("1")), None), DetailState::Loading);
}

#[test]
fn initial_with_matching_payload_is_loaded() {
    let book = make_book("1", "One");
    let state = DetailState::initial(Some(&BookId::from("1")), Some(book.clone()));
    assert_eq!(state, DetailState::Loaded(book));
}

#[test]
fn initial_ignores_payload_for_other_id() {
    let state = DetailState::initial(Some(&BookId::from("2")), Some(make_book("1", "One")));
    assert!(state.is_loading());
}

#[test]
fn initial_without_route_id_is_not_found() {
    assert_eq!(DetailState::initial(None, Some(make_book("1", "One"))), DetailState::NotFound);
}

#[test]
fn default_state_is_loading() {
    assert!(DetailState::default().is_loading());
    assert!(DetailState::default().book().is_none());
}

// =============================================================
// resolve_detail
// =============================================================

#[test]
fn resolve_uses_payload_without_loading() {
    let source = CountingSource::new(vec![make_book("1", "From catalog")]);
    let payload = make_book("1", "From payload");
    let state = block_on(resolve_detail(&source, &BookId::from("1"), Some(payload)));
    assert_eq!(state.book().unwrap().name, "From payload");
    assert_eq!(source.loads.get(), 0);
}

#[test]
fn resolve_loads_catalog_when_no_payload() {
    let source = CountingSource::new(vec![make_book("1", "One"), make_book("7", "Seven")]);
    let state = block_on(resolve_detail(&source, &BookId::from("7"), None));
    assert_eq!(state.book().unwrap().name, "Seven");
    assert_eq!(source.loads.get(), 1);
}

#[test]
fn resolve_loads_catalog_when_payload_mismatches() {
    let source = CountingSource::new(vec![make_book("2", "Two")]);
    let state = block_on(resolve_detail(&source, &BookId::from("2"), Some(make_book("1", "One"))));
    assert_eq!(state.book().unwrap().name, "Two");
    assert_eq!(source.loads.get(), 1);
}

#[test]
fn resolve_missing_id_is_not_found() {
    let source = CountingSource::new(vec![make_book("1", "One")]);
    let state = block_on(resolve_detail(&source, &BookId::from("404"), None));
    assert_eq!(state, DetailState::NotFound);
}

#[test]
fn resolve_load_failure_is_not_found() {
    let state = block_on(resolve_detail(&FailingSource, &BookId::from("1"), None));
    assert_eq!(state, DetailState::NotFound);
}

#[test]
fn resolve_parse_failure_is_not_found() {
    let source = StaticCatalogSource::new("{broken");
    let state = block_on(resolve_detail(&source, &BookId::from("1"), None));
    assert_eq!(state, DetailState::NotFound);
}

#[test]
fn resolve_matches_numeric_json_id() {
    let source = StaticCatalogSource::new(
        r#"[{"bookId": 7, "bookName": "Seven", "author": "B", "image": "", "review": "",
             "totalPages": 1, "rating": 1.0, "category": "", "tags": [], "publisher": "",
             "yearOfPublishing": 1}]"#,
    );
    let state = block_on(resolve_detail(&source, &BookId::from("7"), None));
    assert_eq!(state.book().unwrap().name, "Seven");
}

// =============================================================
// accept_for_route
// =============================================================

#[test]
fn accept_for_route_keeps_result_for_current_id() {
    let state = DetailState::Loaded(make_book("7", "Seven"));
    let accepted = accept_for_route(Some(&BookId::from("7")), &BookId::from("7"), state.clone());
    assert_eq!(accepted, Some(state));
}

#[test]
fn accept_for_route_keeps_not_found_for_current_id() {
    let accepted = accept_for_route(Some(&BookId::from("7")), &BookId::from("7"), DetailState::NotFound);
    assert_eq!(accepted, Some(DetailState::NotFound));
}

#[test]
fn accept_for_route_drops_result_after_route_changed() {
    let state = DetailState::Loaded(make_book("7", "Seven"));
    assert!(accept_for_route(Some(&BookId::from("8")), &BookId::from("7"), state).is_none());
}

#[test]
fn accept_for_route_drops_result_after_route_disposed() {
    assert!(accept_for_route(None, &BookId::from("7"), DetailState::NotFound).is_none());
}
