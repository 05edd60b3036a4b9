//! Typed failures for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Session code only needs to know "is this an auth failure"; forms need a
//! message they can show inline. Both come from the same enum.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// 401 or 403 from the backend.
    #[error("not authorized ({status})")]
    Unauthorized { status: u16 },
    /// Any other non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A success response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Browser-only endpoint called from a server build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the backend considers the current session invalid.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Map a non-success status and its raw body to an `ApiError`.
///
/// Rejection messages come from a JSON `message` or `error` field when the
/// body carries one.
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized { status };
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Rejected { status, message }
}
