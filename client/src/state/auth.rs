//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and identity-aware components; written only by
//! `state::session::Session` through the `AuthCell` seam.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::types::{Identity, Role};

/// Current identity (if any) and whether the initial restore is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl AuthState {
    /// State at application boot: nothing known yet, restore pending.
    pub fn booting() -> Self {
        Self { identity: None, loading: true }
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }
}

/// Mutable home of the `AuthState` owned by the session store.
///
/// The app uses a Leptos `RwSignal`; tests substitute a plain cell.
pub trait AuthCell: Clone + 'static {
    /// Immutable copy of the current state, without reactive tracking.
    fn snapshot(&self) -> AuthState;
    fn update_auth(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn update_auth(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }
}
