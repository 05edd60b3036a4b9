//! Client-side form validation.
//!
//! Validators trim input and return either the cleaned value or the message
//! shown next to the offending field. Form-level helpers collect every field
//! error at once so the whole form can be annotated in one pass.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{Credentials, NewCourse, Registration, Role};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_NAME_LEN: usize = 80;
pub const MIN_TITLE_LEN: usize = 3;
pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Confirm,
    Role,
    Title,
    Description,
}

/// Per-field messages for one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check<T>(&mut self, field: Field, result: Result<T, &'static str>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.push((field, message));
                None
            }
        }
    }
}

/// Non-empty `local@domain.tld` with no whitespace.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }) && !email.chars().any(char::is_whitespace);
    if valid { Ok(email.to_owned()) } else { Err("Enter a valid email address.") }
}

/// Passwords are not trimmed; only emptiness is checked at login.
pub fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() { Err("Password is required.") } else { Ok(raw.to_owned()) }
}

pub fn validate_new_password(raw: &str) -> Result<String, &'static str> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(raw.to_owned())
}

pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password == confirm { Ok(()) } else { Err("Passwords do not match.") }
}

pub fn validate_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Name must be at most 80 characters.");
    }
    Ok(name.to_owned())
}

/// Self-registration may only pick student or instructor.
pub fn validate_signup_role(raw: &str) -> Result<Role, &'static str> {
    match Role::parse(raw) {
        Some(role @ (Role::Student | Role::Instructor)) => Ok(role),
        _ => Err("Choose student or instructor."),
    }
}

pub fn validate_course_title(raw: &str) -> Result<String, &'static str> {
    let title = raw.trim();
    let len = title.chars().count();
    if len < MIN_TITLE_LEN {
        return Err("Title must be at least 3 characters.");
    }
    if len > MAX_TITLE_LEN {
        return Err("Title must be at most 120 characters.");
    }
    Ok(title.to_owned())
}

pub fn validate_course_description(raw: &str) -> Result<String, &'static str> {
    let description = raw.trim();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err("Description must be at most 2000 characters.");
    }
    Ok(description.to_owned())
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::default();
    let email = errors.check(Field::Email, validate_email(email));
    let password = errors.check(Field::Password, validate_password(password));
    match (email, password) {
        (Some(email), Some(password)) => Ok(Credentials { email, password }),
        _ => Err(errors),
    }
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: &str,
) -> Result<Registration, FieldErrors> {
    let mut errors = FieldErrors::default();
    let name = errors.check(Field::Name, validate_name(name));
    let email = errors.check(Field::Email, validate_email(email));
    let confirmed = errors.check(Field::Confirm, validate_confirmation(password, confirm));
    let password = errors.check(Field::Password, validate_new_password(password));
    let role = errors.check(Field::Role, validate_signup_role(role));
    match (name, email, password, confirmed, role) {
        (Some(name), Some(email), Some(password), Some(()), Some(role)) => Ok(Registration { name, email, password, role }),
        _ => Err(errors),
    }
}

pub fn validate_new_course(title: &str, description: &str) -> Result<NewCourse, FieldErrors> {
    let mut errors = FieldErrors::default();
    let title = errors.check(Field::Title, validate_course_title(title));
    let description = errors.check(Field::Description, validate_course_description(description));
    match (title, description) {
        (Some(title), Some(description)) => Ok(NewCourse { title, description }),
        _ => Err(errors),
    }
}
