//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the identity snapshot readers see; `session` is its only
//! writer and owns the lifecycle (restore, refresh, expiry, logout).
//! `logout` and `oauth` are the two flows that end and begin a session
//! outside of the login form. `courses` and `users` hold the pure list edits
//! behind optimistic updates, `listing` the load state of a fetched list;
//! `notice` and `ui` hold presentation state.

pub mod activity;
pub mod auth;
pub mod courses;
pub mod listing;
pub mod logout;
pub mod notice;
pub mod oauth;
pub mod session;
#[cfg(test)]
pub(crate) mod test_support;
pub mod ui;
pub mod users;
