//! Route-guard decision shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! All role checks in the app go through `guard_decision`; pages never
//! compare roles themselves. The `RouteGuard` component renders the result.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::paths;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still running; decide nothing yet.
    Loading,
    RedirectLogin,
    RedirectUnauthorized,
    Render,
}

/// Decide what a route requiring `required` (if any) should show.
pub fn guard_decision(state: &AuthState, required: Option<Role>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let Some(identity) = state.identity.as_ref() else {
        return GuardDecision::RedirectLogin;
    };
    match required {
        Some(role) if identity.role != role => GuardDecision::RedirectUnauthorized,
        _ => GuardDecision::Render,
    }
}

/// Send an already signed-in visitor from a public auth page (login,
/// register) to their landing path once the session is known.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Some(role) = state.role() {
            navigate(paths::landing_path(role), NavigateOptions::default());
        }
    });
}
