//! Networking modules for the LMS REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `error` classifies failures, and `types` defines
//! the wire schema shared by pages and session state.

pub mod api;
pub mod error;
pub mod types;
