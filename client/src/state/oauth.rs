//! Completion of a third-party sign-in.
//!
//! The provider redirect has already established a server-side session, so
//! completing it is one `/auth/me` call followed by role dispatch.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use super::auth::AuthCell;
use super::session::{AuthBackend, Session};
use crate::util::browser::Browser;
use crate::util::paths;

/// Fetch the identity, install it, and hand the landing path to `navigate`.
///
/// Failure navigates to the login page and leaves the session untouched.
pub async fn complete_oauth<C, B, W, F>(session: &Session<C, B, W>, navigate: F)
where
    C: AuthCell,
    B: AuthBackend,
    W: Browser,
    F: Fn(&str),
{
    match session.backend().current_identity().await {
        Ok(identity) => {
            let target = paths::landing_path(identity.role);
            session.login(identity);
            navigate(target);
        }
        Err(e) => {
            leptos::logging::warn!("oauth completion failed: {e}");
            navigate(paths::LOGIN);
        }
    }
}
