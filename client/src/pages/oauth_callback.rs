//! Landing route for the third-party sign-in redirect.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::state::oauth::complete_oauth;

/// Completes sign-in once per mount. Leaving the page before the identity
/// call resolves drops the pending navigation.
#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let alive = Arc::new(AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            complete_oauth(&session, |path| {
                if alive_task.load(Ordering::Relaxed) {
                    navigate(path, NavigateOptions::default());
                }
            })
            .await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, navigate);
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    view! {
        <section class="status-page" aria-busy="true">
            <span class="spinner"></span>
            <p>"Completing sign-in..."</p>
        </section>
    }
}
