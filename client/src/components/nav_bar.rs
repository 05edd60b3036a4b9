//! Top navigation bar: identity, landing link, theme toggle, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Signed-out visitors see login/register links;
//! signed-in users see their own landing page and the course catalog.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::paths;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<AppSession>();

    let identity = move || auth.get().identity;

    let on_logout = move |_| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <nav class="nav-bar">
            <a href=paths::HOME class="nav-bar__brand">"LMS"</a>
            <button
                class="nav-bar__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "☰"
            </button>

            <div class="nav-bar__links" class:nav-bar__links--open=move || ui.get().nav_open>
                {move || match identity() {
                    Some(user) => view! {
                        <a href=paths::landing_path(user.role) class="nav-bar__link">"My dashboard"</a>
                        <a href=paths::COURSES class="nav-bar__link">"Courses"</a>
                    }
                    .into_any(),
                    None => view! {
                        <a href=paths::LOGIN class="nav-bar__link">"Log in"</a>
                        <a href=paths::REGISTER class="nav-bar__link">"Register"</a>
                    }
                    .into_any(),
                }}
            </div>

            <span class="nav-bar__spacer"></span>

            <button
                class="btn nav-bar__theme"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show when=move || identity().is_some()>
                <span class="nav-bar__self">
                    {move || identity().map(|u| u.name).unwrap_or_default()}
                    " ("
                    <span class="nav-bar__role">{move || identity().map(|u| u.role.label()).unwrap_or_default()}</span>
                    ")"
                </span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
