//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod course_card;
pub mod field_error;
pub mod nav_bar;
pub mod route_guard;
pub mod toasts;
