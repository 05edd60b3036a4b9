//! Login page: email + password form and third-party sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::field_error::FieldError;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;
use crate::util::paths;
use crate::util::storage;
use crate::util::validate::{Field, FieldErrors, validate_login};

/// Remembers the last email that signed in successfully on this browser.
const LAST_EMAIL_KEY: &str = "lms_last_email";

/// Banner text for a failed sign-in attempt.
fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { .. } => "Invalid email or password.".to_owned(),
        ApiError::Rejected { message, .. } => message.clone(),
        ApiError::Network(_) | ApiError::Unavailable => "Could not reach the server. Try again.".to_owned(),
        ApiError::Decode(_) => "Unexpected response from the server.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());

    let email = RwSignal::new(storage::load_string(LAST_EMAIL_KEY).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&credentials).await {
                Ok(identity) => {
                    storage::save_string(LAST_EMAIL_KEY, &credentials.email);
                    let role = identity.role;
                    session.login(identity);
                    navigate(paths::landing_path(role), NavigateOptions::default());
                }
                Err(e) => {
                    failure.set(Some(login_failure_message(&e)));
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue learning."</p>
                <Show when=move || failure.get().is_some()>
                    <p class="auth-card__failure" role="alert">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit novalidate>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=errors field=Field::Email/>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=errors field=Field::Password/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="auth-card__divider"></div>
                <a
                    href=api::oauth_entry_url()
                    class="btn auth-card__oauth"
                    on:click=move |ev| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(window) = web_sys::window() {
                                if window.location().set_href(&api::oauth_entry_url()).is_err() {
                                    leptos::logging::warn!("could not start third-party sign-in");
                                }
                            }
                        }
                    }
                >
                    "Continue with Google"
                </a>
                <p class="auth-card__switch">
                    "New here? "
                    <a href=paths::REGISTER>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
