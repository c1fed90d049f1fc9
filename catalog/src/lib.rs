//! Book catalog model, detail resolution, and local interaction rules.
//!
//! This crate owns everything the Book Alley client knows about books that
//! does not touch the browser: the record schema, catalog lookup, the
//! detail-view resolution state machine, and the read/wishlist rules over
//! an injected key-value storage backend. The Leptos client wires these to
//! `fetch` and `localStorage`.

pub mod book;
pub mod interactions;
pub mod resolve;
pub mod source;

pub use book::{BookId, BookRecord};
pub use interactions::{InteractionStore, MemoryStorage, Notice, Severity, StorageBackend, StorageError, StorageKeys};
pub use resolve::{DetailState, accept_for_route, resolve_detail};
pub use source::{Catalog, CatalogError, CatalogSource, StaticCatalogSource};
