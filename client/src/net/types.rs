//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator, so deserialization is lenient:
//! ids may arrive as strings or numbers under `id` or `_id` (`id` wins when
//! both are present), identities may be bare or wrapped in
//! `{ "user": ... }`, and unrecognized roles map to `Role::Unknown` rather
//! than failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role controlling which dashboard subtree a user may enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
    /// Any role string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Human-readable label for badges and selects.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Instructor => "Instructor",
            Self::Admin => "Admin",
            Self::Unknown => "Unknown",
        }
    }

    /// Wire value, as accepted by the role-update endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a select-box value. Unrecognized input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "instructor" => Some(Self::Instructor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// The authenticated user as returned by `/auth/me` and the login endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireIdentity")]
pub struct Identity {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Avatar image URL, if any.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize)]
struct WireIdentity {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "deserialize_opt_id")]
    legacy_id: Option<String>,
    name: String,
    email: String,
    role: Role,
    #[serde(default)]
    avatar: Option<String>,
}

impl TryFrom<WireIdentity> for Identity {
    type Error = &'static str;

    fn try_from(wire: WireIdentity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: pick_id(wire.id, wire.legacy_id)?,
            name: wire.name,
            email: wire.email,
            role: wire.role,
            avatar: wire.avatar,
        })
    }
}

/// `/auth/me` may answer with the identity itself or wrap it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MeResponse {
    Wrapped { user: Identity },
    Bare(Identity),
}

impl MeResponse {
    pub fn into_identity(self) -> Identity {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Login/register response: identity plus optional bearer credential.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    #[serde(default, alias = "accessToken", alias = "access_token")]
    pub token: Option<String>,
}

/// Token-refresh response. Cookie-only backends send an empty body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    #[serde(default, alias = "accessToken", alias = "access_token")]
    pub token: Option<String>,
}

/// Email/password login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Self-service registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A course as listed in the catalog and dashboards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireCourse")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "instructorName")]
    pub instructor_name: Option<String>,
    /// Whether the current user is enrolled. Absent means not enrolled.
    #[serde(default, alias = "isEnrolled")]
    pub enrolled: bool,
}

#[derive(Deserialize)]
struct WireCourse {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "deserialize_opt_id")]
    legacy_id: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "instructorName")]
    instructor_name: Option<String>,
    #[serde(default, alias = "isEnrolled")]
    enrolled: bool,
}

impl TryFrom<WireCourse> for Course {
    type Error = &'static str;

    fn try_from(wire: WireCourse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: pick_id(wire.id, wire.legacy_id)?,
            title: wire.title,
            description: wire.description,
            instructor_name: wire.instructor_name,
            enrolled: wire.enrolled,
        })
    }
}

/// Course creation payload for instructors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
}

/// A user row in the admin user-management table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ManagedUser {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

fn pick_id(id: Option<String>, legacy_id: Option<String>) -> Result<String, &'static str> {
    id.or(legacy_id).ok_or("missing field `id`")
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_id(deserializer).map(Some)
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
