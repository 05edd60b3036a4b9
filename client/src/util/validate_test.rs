use super::*;

// =============================================================
// Field validators
// =============================================================

#[test]
fn validate_email_trims_and_accepts_plain_address() {
    assert_eq!(validate_email("  user@example.com  "), Ok("user@example.com".to_owned()));
}

#[test]
fn validate_email_requires_value() {
    assert_eq!(validate_email("   "), Err("Email is required."));
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    for bad in ["user", "@example.com", "user@", "user@example", "user@.com", "user@example.", "a@b@c.com", "a b@c.com"] {
        assert_eq!(validate_email(bad), Err("Enter a valid email address."), "{bad}");
    }
}

#[test]
fn validate_password_only_checks_presence() {
    assert_eq!(validate_password(""), Err("Password is required."));
    assert_eq!(validate_password(" x "), Ok(" x ".to_owned()));
}

#[test]
fn validate_new_password_enforces_minimum_length() {
    assert_eq!(validate_new_password("short"), Err("Password must be at least 8 characters."));
    assert!(validate_new_password("longenough").is_ok());
}

#[test]
fn validate_name_enforces_bounds() {
    assert_eq!(validate_name("  "), Err("Name is required."));
    assert_eq!(validate_name(&"x".repeat(81)), Err("Name must be at most 80 characters."));
    assert_eq!(validate_name(" Ada "), Ok("Ada".to_owned()));
}

#[test]
fn validate_signup_role_rejects_admin() {
    assert_eq!(validate_signup_role("student"), Ok(Role::Student));
    assert_eq!(validate_signup_role("Instructor"), Ok(Role::Instructor));
    assert_eq!(validate_signup_role("admin"), Err("Choose student or instructor."));
    assert_eq!(validate_signup_role(""), Err("Choose student or instructor."));
}

#[test]
fn validate_course_title_bounds() {
    assert_eq!(validate_course_title(" ab "), Err("Title must be at least 3 characters."));
    assert_eq!(validate_course_title(&"t".repeat(121)), Err("Title must be at most 120 characters."));
    assert_eq!(validate_course_title(" Rust 101 "), Ok("Rust 101".to_owned()));
}

#[test]
fn validate_course_description_allows_empty() {
    assert_eq!(validate_course_description("   "), Ok(String::new()));
    assert!(validate_course_description(&"d".repeat(2001)).is_err());
}

// =============================================================
// Form validators
// =============================================================

#[test]
fn validate_login_builds_credentials() {
    let creds = validate_login(" a@b.co ", "secret").unwrap();
    assert_eq!(creds, Credentials { email: "a@b.co".to_owned(), password: "secret".to_owned() });
}

#[test]
fn validate_login_reports_every_field() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get(Field::Email), Some("Email is required."));
    assert_eq!(errors.get(Field::Password), Some("Password is required."));
    assert_eq!(errors.get(Field::Name), None);
}

#[test]
fn validate_registration_accepts_complete_form() {
    let reg = validate_registration("Ada", "ada@example.com", "password1", "password1", "student").unwrap();
    assert_eq!(reg.role, Role::Student);
    assert_eq!(reg.name, "Ada");
}

#[test]
fn validate_registration_flags_mismatched_confirmation_only() {
    let errors = validate_registration("Ada", "ada@example.com", "password1", "password2", "student").unwrap_err();
    assert_eq!(errors.get(Field::Confirm), Some("Passwords do not match."));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn validate_registration_short_matching_password_flags_length_only() {
    let errors = validate_registration("Ada", "ada@example.com", "short", "short", "student").unwrap_err();
    assert_eq!(errors.get(Field::Password), Some("Password must be at least 8 characters."));
    assert_eq!(errors.get(Field::Confirm), None);
}

#[test]
fn validate_new_course_collects_errors() {
    let errors = validate_new_course("x", &"d".repeat(2001)).unwrap_err();
    assert!(!errors.is_empty());
    assert!(errors.get(Field::Title).is_some());
    assert!(errors.get(Field::Description).is_some());
}
