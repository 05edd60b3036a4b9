//! Student landing page: courses the user is enrolled in.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::course_card::CourseCard;
use crate::net::api;
use crate::net::types::Course;
use crate::state::auth::AuthState;
use crate::state::listing::Listing;
use crate::util::paths;

use super::{listing_status, load_listing};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let courses = RwSignal::new(Listing::<Course>::default());
    load_listing(courses, session, api::enrolled_courses());

    let greeting = move || {
        auth.get()
            .identity
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_default()
    };

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>{greeting}</h1>
                <a href=paths::COURSES class="btn">"Browse catalog"</a>
            </header>
            <h2 class="page__section">"My courses"</h2>
            {listing_status(courses, "You are not enrolled in any course yet.")}
            <div class="course-grid">
                <For
                    each=move || courses.get().items
                    key=|course| course.id.clone()
                    children=|course| view! { <CourseCard course=course/> }
                />
            </div>
        </div>
    }
}
