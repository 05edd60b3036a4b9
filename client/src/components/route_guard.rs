//! Gate a route subtree on authentication and role.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision};
use crate::util::paths;

/// Renders `children` only for a signed-in user holding `role` (when given).
///
/// The decision is memoized, so identity refreshes that do not change the
/// outcome leave the protected subtree mounted.
#[component]
pub fn RouteGuard(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| auth.with(|state| guard_decision(state, role)));

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="route-guard__loading" aria-busy="true">
                <span class="spinner"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        GuardDecision::RedirectLogin => view! { <Redirect path=paths::LOGIN/> }.into_any(),
        GuardDecision::RedirectUnauthorized => view! { <Redirect path=paths::UNAUTHORIZED/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
