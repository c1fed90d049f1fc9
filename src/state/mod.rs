//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models.
//! Each model is plain data held in an `RwSignal` provided via context.

pub mod listing;
pub mod selection;
pub mod toast;
