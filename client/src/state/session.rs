//! Session store: single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` owns the `AuthState` cell and is the only writer to it. Pages
//! receive it via context; the route guard and components read snapshots.
//! Background loops (`util::session_timers`) call the `*_tick` methods.
//!
//! ERROR HANDLING
//! ==============
//! Network failures in restore and the background ticks are logged and
//! turned into state transitions (identity cleared), never surfaced as
//! blocking errors.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser event loop, but every network await is a
//! suspension point where another tick or a user click may call `logout`.
//! An in-flight flag keeps concurrent logouts to a single coordinator run,
//! and a liveness response that arrives after logout began is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::activity::ActivityClock;
use super::auth::{AuthCell, AuthState};
use super::logout::sign_out;
use crate::net::error::ApiError;
use crate::net::types::Identity;
use crate::util::browser::Browser;
use crate::util::paths;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);
pub const LIVENESS_INTERVAL: Duration = Duration::from_secs(5 * 60);
pub const INACTIVITY_CHECK_INTERVAL: Duration = Duration::from_secs(60);
pub const INACTIVITY_LIMIT: Duration = Duration::from_secs(15 * 60);

/// The backend calls the session lifecycle depends on.
#[allow(async_fn_in_trait)]
pub trait AuthBackend: Clone + 'static {
    /// `GET /auth/me`.
    async fn current_identity(&self) -> Result<Identity, ApiError>;
    /// `POST /auth/refresh-token`.
    async fn refresh_token(&self) -> Result<(), ApiError>;
    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct Session<C, B, W> {
    auth: C,
    backend: B,
    browser: W,
    activity: ActivityClock,
    signing_out: Arc<AtomicBool>,
}

impl<C, B, W> Session<C, B, W>
where
    C: AuthCell,
    B: AuthBackend,
    W: Browser,
{
    pub fn new(auth: C, backend: B, browser: W) -> Self {
        Self {
            auth,
            backend,
            browser,
            activity: ActivityClock::default(),
            signing_out: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn auth(&self) -> &C {
        &self.auth
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn browser(&self) -> &W {
        &self.browser
    }

    pub fn activity(&self) -> &ActivityClock {
        &self.activity
    }

    pub fn snapshot(&self) -> AuthState {
        self.auth.snapshot()
    }

    /// Install an identity obtained by the caller (login form, OAuth return).
    pub fn login(&self, identity: Identity) {
        self.activity.touch(self.browser.now_ms());
        self.auth.update_auth(|a| {
            a.identity = Some(identity);
            a.loading = false;
        });
    }

    /// Ask the backend who is signed in. Runs once at startup.
    ///
    /// The answer only applies while the boot-time loading flag is still
    /// set: a `login` that completes first wins, whatever restore returns.
    pub async fn restore(&self) {
        let identity = match self.backend.current_identity().await {
            Ok(identity) => Some(identity),
            Err(e) => {
                if !e.is_auth() {
                    leptos::logging::warn!("session restore failed: {e}");
                }
                None
            }
        };
        let now = self.browser.now_ms();
        let activity = &self.activity;
        self.auth.update_auth(|a| {
            if !a.loading {
                return;
            }
            if identity.is_some() {
                activity.touch(now);
            }
            a.identity = identity;
            a.loading = false;
        });
    }

    /// Notify the server, force a full navigation home, then clear identity.
    ///
    /// No-op when signed out or when another logout is already running.
    pub async fn logout(&self) {
        if !self.auth.snapshot().is_signed_in() {
            return;
        }
        if self.signing_out.swap(true, Ordering::SeqCst) {
            return;
        }
        sign_out(&self.backend, &self.browser).await;
        self.auth.update_auth(|a| a.identity = None);
        self.signing_out.store(false, Ordering::SeqCst);
    }

    /// Renew the session credential; a failed renewal ends the session.
    pub async fn refresh_tick(&self) {
        if !self.auth.snapshot().is_signed_in() {
            return;
        }
        if let Err(e) = self.backend.refresh_token().await {
            leptos::logging::warn!("token refresh failed, signing out: {e}");
            self.logout().await;
        }
    }

    /// Re-validate the identity with the backend; failure ends the session.
    pub async fn liveness_tick(&self) {
        if !self.auth.snapshot().is_signed_in() {
            return;
        }
        match self.backend.current_identity().await {
            Ok(identity) => {
                if self.signing_out.load(Ordering::SeqCst) {
                    return;
                }
                self.auth.update_auth(|a| {
                    if a.identity.is_some() {
                        a.identity = Some(identity);
                    }
                });
            }
            Err(e) => {
                leptos::logging::warn!("session check failed, signing out: {e}");
                self.logout().await;
            }
        }
    }

    /// Sign out when no user gesture was recorded within `INACTIVITY_LIMIT`.
    pub async fn inactivity_tick(&self) {
        if !self.auth.snapshot().is_signed_in() {
            return;
        }
        if self.activity.is_idle(self.browser.now_ms(), INACTIVITY_LIMIT) {
            leptos::logging::log!("signing out after inactivity");
            self.logout().await;
        }
    }

    /// Treat a 401/403 from any protected call as the end of the session.
    pub async fn on_api_error(&self, err: &ApiError) {
        if err.is_auth() {
            leptos::logging::warn!("request rejected as unauthenticated, signing out: {err}");
            self.logout().await;
        }
    }

    /// Another tab signed out and dropped the shared bearer token.
    ///
    /// The server session is already gone, so only the local identity is
    /// cleared before the same full navigation home that `logout` performs.
    pub fn signed_out_elsewhere(&self) {
        if !self.auth.snapshot().is_signed_in() || self.signing_out.load(Ordering::SeqCst) {
            return;
        }
        leptos::logging::log!("signed out in another tab");
        self.auth.update_auth(|a| a.identity = None);
        self.browser.hard_redirect(paths::HOME);
    }

    /// Pointer-move / key-down hook.
    pub fn record_activity(&self) {
        self.activity.touch(self.browser.now_ms());
    }
}
