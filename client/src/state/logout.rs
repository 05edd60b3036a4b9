//! Logout/redirect coordinator.
//!
//! One best-effort server notification, then an unconditional full-page
//! navigation to the public root so every piece of in-memory state is
//! discarded by a fresh load. Logout never fails from the user's side: a
//! server error only produces a notice, shown by the page that loads next.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use super::notice::Notice;
use super::session::AuthBackend;
use crate::util::browser::Browser;
use crate::util::paths;

pub const LOGOUT_FAILED_MESSAGE: &str = "Signed out on this device, but the server could not be reached.";

pub async fn sign_out<B: AuthBackend, W: Browser>(backend: &B, browser: &W) {
    if let Err(e) = backend.logout().await {
        leptos::logging::warn!("server logout failed: {e}");
        browser.notify_after_reload(Notice::error(LOGOUT_FAILED_MESSAGE));
    }
    browser.hard_redirect(paths::HOME);
}
