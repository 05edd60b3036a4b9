//! In-memory admin user-table edits used for optimistic UI updates.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{ManagedUser, Role};

/// Change the role of `user_id`. Returns the previous role, if found.
pub fn set_role(users: &mut [ManagedUser], user_id: &str, role: Role) -> Option<Role> {
    let user = users.iter_mut().find(|u| u.identity.id == user_id)?;
    Some(std::mem::replace(&mut user.identity.role, role))
}

/// Remove `user_id`, returning its position and row for a later `restore`.
pub fn remove(users: &mut Vec<ManagedUser>, user_id: &str) -> Option<(usize, ManagedUser)> {
    let index = users.iter().position(|u| u.identity.id == user_id)?;
    Some((index, users.remove(index)))
}

/// Undo a `remove`, clamping the index if the list shrank meanwhile.
pub fn restore(users: &mut Vec<ManagedUser>, index: usize, user: ManagedUser) {
    let index = index.min(users.len());
    users.insert(index, user);
}
