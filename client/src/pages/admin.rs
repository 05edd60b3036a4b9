//! Admin user management: role changes and account deletion.
//!
//! Both actions update the table immediately and roll back with an error
//! notice when the server refuses. Admins cannot act on their own row.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::api;
use crate::net::types::{ManagedUser, Role};
use crate::state::auth::AuthState;
use crate::state::listing::Listing;
use crate::state::notice::Notice;
use crate::state::users;
use crate::util::browser::Browser;

use super::{listing_status, load_listing};

const ASSIGNABLE_ROLES: [Role; 3] = [Role::Student, Role::Instructor, Role::Admin];

fn confirm_delete(name: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete {name}? This cannot be undone.")).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        false
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let people = RwSignal::new(Listing::<ManagedUser>::default());
    load_listing(people, session.clone(), api::list_users());

    let self_id = move || auth.with_untracked(|s| s.identity.as_ref().map(|u| u.id.clone()));

    let session_role = session.clone();
    let on_role_change = Callback::new(move |(user_id, raw): (String, String)| {
        let Some(role) = Role::parse(&raw) else {
            return;
        };
        let mut previous = None;
        people.update(|l| previous = users::set_role(&mut l.items, &user_id, role));
        let Some(previous) = previous.filter(|p| *p != role) else {
            return;
        };
        let session = session_role.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::update_user_role(&user_id, role).await {
                people.update(|l| {
                    users::set_role(&mut l.items, &user_id, previous);
                });
                session.browser().notify(Notice::error(format!("Role change failed: {e}")));
                session.on_api_error(&e).await;
            }
        });
    });

    let on_delete = Callback::new(move |user_id: String| {
        let name = people.with_untracked(|l| {
            l.items
                .iter()
                .find(|u| u.identity.id == user_id)
                .map(|u| u.identity.name.clone())
        });
        let Some(name) = name else {
            return;
        };
        if !confirm_delete(&name) {
            return;
        }
        let mut removed = None;
        people.update(|l| removed = users::remove(&mut l.items, &user_id));
        let Some((index, row)) = removed else {
            return;
        };
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match api::delete_user(&user_id).await {
                Ok(()) => session.browser().notify(Notice::info(format!("Deleted {name}."))),
                Err(e) => {
                    people.update(|l| users::restore(&mut l.items, index, row));
                    session.browser().notify(Notice::error(format!("Could not delete {name}: {e}")));
                    session.on_api_error(&e).await;
                }
            }
        });
    });

    view! {
        <div class="page admin-page">
            <header class="page__header">
                <h1>"User management"</h1>
            </header>
            {listing_status(people, "No users found.")}
            <Show when=move || !people.with(|l| l.items.is_empty())>
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || people.get().items
                            key=|user| (user.identity.id.clone(), user.identity.role)
                            children=move |user| {
                                let ManagedUser { identity, .. } = user;
                                let is_self = self_id().as_deref() == Some(identity.id.as_str());
                                let role_id = identity.id.clone();
                                let delete_id = identity.id.clone();
                                let current = identity.role;
                                view! {
                                    <tr class="user-table__row" class:user-table__row--self=is_self>
                                        <td>{identity.name}</td>
                                        <td>{identity.email}</td>
                                        <td>
                                            <select
                                                class="form__input user-table__role"
                                                disabled=is_self
                                                on:change=move |ev| on_role_change.run((role_id.clone(), event_target_value(&ev)))
                                            >
                                                {ASSIGNABLE_ROLES
                                                    .iter()
                                                    .map(|role| {
                                                        view! {
                                                            <option value=role.as_str() selected={*role == current}>
                                                                {role.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn--danger"
                                                disabled=is_self
                                                on:click=move |_| on_delete.run(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
