//! REST adapter for the LMS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included and the stored bearer token attached when present.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so auth failures can
//! be turned into session transitions and form failures into inline text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::error_for_status;
use super::types::{
    AuthResponse, Course, Credentials, Identity, ManagedUser, MeResponse, NewCourse, RefreshResponse, Registration,
    Role,
};
use crate::state::session::AuthBackend;
use crate::util::storage;

/// Backend base URL, fixed at compile time through `LMS_API_BASE`.
pub const API_BASE: &str = match option_env!("LMS_API_BASE") {
    Some(base) => base,
    None => "/api",
};

const TOKEN_KEY: &str = "lms_access_token";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// Join `base` and `path` with exactly one slash between them.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn course_enroll_path(course_id: &str) -> String {
    format!("/courses/{course_id}/enroll")
}

fn user_path(user_id: &str) -> String {
    format!("/users/{user_id}")
}

fn user_role_path(user_id: &str) -> String {
    format!("/users/{user_id}/role")
}

/// Decode a response body; an empty body decodes as `{}`.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Whether a `storage` event from another tab dropped the bearer token.
/// A `None` key means that tab cleared all of storage.
pub fn token_cleared(key: Option<&str>, new_value: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == TOKEN_KEY && new_value.is_none(),
    }
}

/// Full URL of the third-party sign-in entry point.
pub fn oauth_entry_url() -> String {
    endpoint(API_BASE, "/auth/google")
}

/// Issue one request and return the raw body of a successful response.
async fn call(verb: Verb, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(API_BASE, path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let builder = match storage::load_string(TOKEN_KEY) {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        };

        let sent = match body {
            Some(payload) => {
                builder
                    .json(&payload)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(error_for_status(resp.status(), &text));
        }
        Ok(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

fn store_token(token: Option<&str>) {
    if let Some(token) = token {
        storage::save_string(TOKEN_KEY, token);
    }
}

fn to_payload<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated identity from `GET /auth/me`.
///
/// # Errors
///
/// `Unauthorized` when there is no valid session, or any transport failure.
pub async fn fetch_current_user() -> Result<Identity, ApiError> {
    let text = call(Verb::Get, "/auth/me", None).await?;
    parse_body::<MeResponse>(&text).map(MeResponse::into_identity)
}

/// Sign in with email and password via `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend's rejection (bad credentials) or a transport failure.
pub async fn login(credentials: &Credentials) -> Result<Identity, ApiError> {
    let text = call(Verb::Post, "/auth/login", Some(to_payload(credentials)?)).await?;
    let resp: AuthResponse = parse_body(&text)?;
    store_token(resp.token.as_deref());
    Ok(resp.user)
}

/// Create an account via `POST /auth/register`; the new account is signed in.
///
/// # Errors
///
/// Returns the backend's rejection (duplicate email etc.) or a transport failure.
pub async fn register(registration: &Registration) -> Result<Identity, ApiError> {
    let text = call(Verb::Post, "/auth/register", Some(to_payload(registration)?)).await?;
    let resp: AuthResponse = parse_body(&text)?;
    store_token(resp.token.as_deref());
    Ok(resp.user)
}

/// Renew the session credential via `POST /auth/refresh-token`.
///
/// # Errors
///
/// Any failure means the session can no longer be renewed.
pub async fn refresh_token() -> Result<(), ApiError> {
    let text = call(Verb::Post, "/auth/refresh-token", None).await?;
    let resp: RefreshResponse = parse_body(&text)?;
    store_token(resp.token.as_deref());
    Ok(())
}

/// Invalidate the server-side session via `POST /auth/logout`.
///
/// The stored bearer token is dropped whether or not the call succeeds.
///
/// # Errors
///
/// Returns the transport or backend failure for the caller to report.
pub async fn logout() -> Result<(), ApiError> {
    let result = call(Verb::Post, "/auth/logout", None).await;
    storage::remove(TOKEN_KEY);
    result.map(|_| ())
}

// =============================================================================
// COURSES
// =============================================================================

/// Full course catalog, with `enrolled` set for the current user.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn list_courses() -> Result<Vec<Course>, ApiError> {
    let text = call(Verb::Get, "/courses", None).await?;
    parse_body(&text)
}

/// Courses the current user is enrolled in.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn enrolled_courses() -> Result<Vec<Course>, ApiError> {
    let text = call(Verb::Get, "/courses/enrolled", None).await?;
    parse_body(&text)
}

/// Courses taught by the current instructor.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn instructor_courses() -> Result<Vec<Course>, ApiError> {
    let text = call(Verb::Get, "/courses/mine", None).await?;
    parse_body(&text)
}

/// Create a course owned by the current instructor.
///
/// # Errors
///
/// Returns the backend's validation rejection or a transport failure.
pub async fn create_course(course: &NewCourse) -> Result<Course, ApiError> {
    let text = call(Verb::Post, "/courses", Some(to_payload(course)?)).await?;
    parse_body(&text)
}

/// Enroll the current user in `course_id`.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn enroll(course_id: &str) -> Result<(), ApiError> {
    call(Verb::Post, &course_enroll_path(course_id), None).await.map(|_| ())
}

// =============================================================================
// ADMIN USERS
// =============================================================================

/// All users, for the admin management table.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn list_users() -> Result<Vec<ManagedUser>, ApiError> {
    let text = call(Verb::Get, "/users", None).await?;
    parse_body(&text)
}

/// Change a user's role.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn update_user_role(user_id: &str, role: Role) -> Result<(), ApiError> {
    let payload = serde_json::json!({ "role": role });
    call(Verb::Patch, &user_role_path(user_id), Some(payload)).await.map(|_| ())
}

/// Delete a user account.
///
/// # Errors
///
/// Returns any transport or backend failure.
pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    call(Verb::Delete, &user_path(user_id), None).await.map(|_| ())
}

/// `AuthBackend` backed by the REST endpoints above.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    async fn current_identity(&self) -> Result<Identity, ApiError> {
        fetch_current_user().await
    }

    async fn refresh_token(&self) -> Result<(), ApiError> {
        refresh_token().await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        logout().await
    }
}
