use super::*;

#[test]
fn landing_path_dispatches_by_role() {
    assert_eq!(landing_path(Role::Student), DASHBOARD);
    assert_eq!(landing_path(Role::Instructor), INSTRUCTOR);
    assert_eq!(landing_path(Role::Admin), ADMIN);
}

#[test]
fn unknown_role_lands_on_unauthorized() {
    assert_eq!(landing_path(Role::Unknown), UNAUTHORIZED);
}
