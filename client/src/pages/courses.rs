//! Course catalog with optimistic enrollment.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::course_card::CourseCard;
use crate::net::api;
use crate::net::types::{Course, Role};
use crate::state::auth::AuthState;
use crate::state::courses::set_enrolled;
use crate::state::listing::Listing;
use crate::state::notice::Notice;
use crate::util::auth::{GuardDecision, guard_decision};
use crate::util::browser::Browser;

use super::{listing_status, load_listing};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let courses = RwSignal::new(Listing::<Course>::default());
    load_listing(courses, session.clone(), api::list_courses());

    let can_enroll = move || auth.with_untracked(|s| guard_decision(s, Some(Role::Student)) == GuardDecision::Render);

    let on_enroll = Callback::new(move |course_id: String| {
        let mut previous = None;
        courses.update(|l| previous = set_enrolled(&mut l.items, &course_id, true));
        if previous != Some(false) {
            return;
        }
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match api::enroll(&course_id).await {
                Ok(()) => session.browser().notify(Notice::info("Enrolled.")),
                Err(e) => {
                    courses.update(|l| {
                        set_enrolled(&mut l.items, &course_id, false);
                    });
                    session.browser().notify(Notice::error(format!("Could not enroll: {e}")));
                    session.on_api_error(&e).await;
                }
            }
        });
    });

    view! {
        <div class="page courses-page">
            <header class="page__header">
                <h1>"Course catalog"</h1>
            </header>
            {listing_status(courses, "No courses are available yet.")}
            <div class="course-grid">
                <For
                    each=move || courses.get().items
                    key=|course| (course.id.clone(), course.enrolled)
                    children=move |course| {
                        if can_enroll() && !course.enrolled {
                            view! { <CourseCard course=course action_label="Enroll" on_action=on_enroll/> }.into_any()
                        } else {
                            view! { <CourseCard course=course/> }.into_any()
                        }
                    }
                />
            </div>
        </div>
    }
}
