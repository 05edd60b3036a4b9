//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::paths;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Learn at your own pace"</h1>
            <p class="home-page__lead">
                "Browse courses, enroll in a click, and pick up where you left off."
            </p>
            <div class="home-page__actions">
                {move || match auth.get().role() {
                    Some(role) => view! {
                        <a href=paths::landing_path(role) class="btn btn--primary">"Go to my dashboard"</a>
                    }
                    .into_any(),
                    None => view! {
                        <a href=paths::LOGIN class="btn btn--primary">"Sign in"</a>
                        <a href=paths::REGISTER class="btn">"Create an account"</a>
                    }
                    .into_any(),
                }}
                <a href=paths::COURSES class="btn btn--ghost">"Browse courses"</a>
            </div>
        </section>
    }
}
