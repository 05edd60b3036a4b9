//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod dark_mode;
pub mod paths;
#[cfg(feature = "hydrate")]
pub mod session_timers;
pub mod storage;
pub mod timer_slot;
pub mod validate;
