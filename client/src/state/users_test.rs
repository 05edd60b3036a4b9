use super::*;
use crate::net::types::Identity;

fn user(id: &str, role: Role) -> ManagedUser {
    ManagedUser {
        identity: Identity {
            id: id.to_owned(),
            name: format!("User {id}"),
            email: format!("{id}@example.com"),
            role,
            avatar: None,
        },
        created_at: None,
    }
}

#[test]
fn set_role_returns_previous_role() {
    let mut users = vec![user("a", Role::Student)];
    assert_eq!(set_role(&mut users, "a", Role::Instructor), Some(Role::Student));
    assert_eq!(users[0].identity.role, Role::Instructor);
}

#[test]
fn set_role_unknown_user_is_none() {
    let mut users = vec![user("a", Role::Student)];
    assert_eq!(set_role(&mut users, "b", Role::Admin), None);
}

#[test]
fn remove_then_restore_keeps_order() {
    let mut users = vec![user("a", Role::Student), user("b", Role::Admin), user("c", Role::Student)];
    let (index, row) = remove(&mut users, "b").unwrap();
    assert_eq!(index, 1);
    assert_eq!(users.len(), 2);
    restore(&mut users, index, row);
    let ids: Vec<_> = users.iter().map(|u| u.identity.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn restore_clamps_index_past_end() {
    let mut users = vec![user("a", Role::Student)];
    restore(&mut users, 10, user("z", Role::Admin));
    assert_eq!(users[1].identity.id, "z");
}

#[test]
fn remove_missing_user_is_none() {
    let mut users = vec![user("a", Role::Student)];
    assert!(remove(&mut users, "nope").is_none());
    assert_eq!(users.len(), 1);
}
