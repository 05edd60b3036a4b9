//! Route paths and role-based landing targets.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use crate::net::types::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const UNAUTHORIZED: &str = "/unauthorized";
pub const OAUTH_CALLBACK: &str = "/oauth/callback";
pub const DASHBOARD: &str = "/dashboard";
pub const COURSES: &str = "/courses";
pub const INSTRUCTOR: &str = "/instructor";
pub const ADMIN: &str = "/admin";

/// Where a freshly signed-in user of `role` should land.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Student => DASHBOARD,
        Role::Instructor => INSTRUCTOR,
        Role::Admin => ADMIN,
        Role::Unknown => UNAUTHORIZED,
    }
}
