//! Self-service sign-up for students and instructors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::field_error::FieldError;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;
use crate::util::paths;
use crate::util::validate::{Field, FieldErrors, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student.as_str().to_owned());
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let registration = match validate_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(registration) => registration,
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
            match api::register(&registration).await {
                Ok(identity) => {
                    let landing = paths::landing_path(identity.role);
                    session.login(identity);
                    navigate(landing, NavigateOptions::default());
                }
                Err(ApiError::Rejected { message, .. }) => failure.set(Some(message)),
                Err(e) => failure.set(Some(format!("Registration failed: {e}"))),
            }
            busy.set(false);
        });
    };

    let text_input = move |label: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <Show when=move || failure.get().is_some()>
                    <p class="auth-card__failure" role="alert">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit novalidate>
                    {text_input("Full name", "text", "name", name)}
                    <FieldError errors=errors field=Field::Name/>
                    {text_input("Email", "email", "email", email)}
                    <FieldError errors=errors field=Field::Email/>
                    {text_input("Password", "password", "new-password", password)}
                    <FieldError errors=errors field=Field::Password/>
                    {text_input("Confirm password", "password", "new-password", confirm)}
                    <FieldError errors=errors field=Field::Confirm/>
                    <label class="form__label">
                        "I am a"
                        <select
                            class="form__input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value=Role::Student.as_str()>{Role::Student.label()}</option>
                            <option value=Role::Instructor.as_str()>{Role::Instructor.label()}</option>
                        </select>
                    </label>
                    <FieldError errors=errors field=Field::Role/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
