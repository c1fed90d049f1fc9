//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (catalog loading, resolution)
//! and delegates rendering details to `components`.

pub mod book_detail;
pub mod home;
