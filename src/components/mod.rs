//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog records and app chrome, reading shared state
//! from Leptos context providers installed by `App`.

pub mod book_card;
pub mod footer;
pub mod loading;
pub mod toast_stack;
