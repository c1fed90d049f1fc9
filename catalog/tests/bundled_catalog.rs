//! The shipped `Books.json` must parse and satisfy the catalog invariants.

use std::collections::HashSet;

use catalog::{BookId, Catalog, DetailState, StaticCatalogSource, resolve_detail};

const BUNDLED: &str = include_str!("../../public/Books.json");

#[test]
fn bundled_catalog_parses() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    assert!(!catalog.is_empty());
}

#[test]
fn bundled_catalog_keeps_every_entry() {
    let raw: Vec<serde_json::Value> = serde_json::from_str(BUNDLED).unwrap();
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    assert_eq!(catalog.len(), raw.len(), "some bundled entries were skipped");
}

#[test]
fn bundled_ids_are_unique() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    let ids: HashSet<_> = catalog.books().iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn bundled_records_have_display_fields() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    for book in catalog.books() {
        assert!(!book.name.is_empty(), "book {} has no name", book.id);
        assert!(!book.image.is_empty(), "book {} has no image", book.id);
    }
}

#[test]
fn route_id_resolves_against_numeric_bundled_id() {
    let source = StaticCatalogSource::new(BUNDLED);
    let state = futures::executor::block_on(resolve_detail(&source, &BookId::from("7"), None));
    assert!(matches!(state, DetailState::Loaded(ref book) if book.name == "The Hobbit"));
}
