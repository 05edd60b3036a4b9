//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages assume `RouteGuard` already checked the
//! session and role; they only react to 401/403 from their own calls.

pub mod admin;
pub mod courses;
pub mod dashboard;
pub mod home;
pub mod instructor;
pub mod login;
pub mod oauth_callback;
pub mod register;
pub mod unauthorized;

use std::future::Future;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::error::ApiError;
use crate::state::listing::Listing;

/// Fill `listing` from `fetch` once, on the client. An auth failure also
/// ends the session.
pub(crate) fn load_listing<T, Fut>(listing: RwSignal<Listing<T>>, session: AppSession, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch.await {
            Ok(items) => listing.set(Listing::loaded(items)),
            Err(e) => {
                listing.set(Listing::failed(e.to_string()));
                session.on_api_error(&e).await;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (listing, session, fetch);
    }
}

/// Loading line, error banner, or empty-state text for a listing.
pub(crate) fn listing_status<T>(listing: RwSignal<Listing<T>>, empty: &'static str) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    move || {
        listing.with(|l| {
            if l.loading {
                Some(view! { <p class="page__status">"Loading..."</p> }.into_any())
            } else if let Some(error) = l.error.clone() {
                Some(view! { <p class="page__error" role="alert">{error}</p> }.into_any())
            } else if l.items.is_empty() {
                Some(view! { <p class="page__status">{empty}</p> }.into_any())
            } else {
                None
            }
        })
    }
}
