//! Browser helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from page and component logic; each
//! compiles to a harmless fallback outside the `csr` build so the rest of
//! the crate stays testable natively.

pub mod history;
pub mod local_storage;
