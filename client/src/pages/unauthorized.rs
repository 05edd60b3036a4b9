//! Shown when a signed-in user opens a route reserved for another role.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::paths;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let back = move || {
        auth.get()
            .role()
            .map(paths::landing_path)
            .filter(|path| *path != paths::UNAUTHORIZED)
            .unwrap_or(paths::HOME)
    };

    view! {
        <section class="status-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view this page."</p>
            <a href=back class="btn btn--primary">"Take me back"</a>
        </section>
    }
}
