//! Card for one course in catalog and dashboard grids.

use leptos::prelude::*;

use crate::net::types::Course;

/// Course summary with an optional action button (e.g. "Enroll").
///
/// `action` is rendered only when both a label and a callback are given.
#[component]
pub fn CourseCard(
    course: Course,
    #[prop(optional)] action_label: Option<&'static str>,
    #[prop(optional)] on_action: Option<Callback<String>>,
    #[prop(optional)] busy: bool,
) -> impl IntoView {
    let Course { id, title, description, instructor_name, enrolled } = course;
    let action = action_label.zip(on_action).map(|(label, cb)| {
        view! {
            <button class="btn btn--primary course-card__action" disabled=busy on:click=move |_| cb.run(id.clone())>
                {label}
            </button>
        }
    });

    view! {
        <article class="course-card" class:course-card--enrolled=enrolled>
            <h3 class="course-card__title">{title}</h3>
            {instructor_name.map(|name| view! { <p class="course-card__instructor">{name}</p> })}
            <p class="course-card__description">{description}</p>
            <Show when=move || enrolled>
                <span class="course-card__badge">"Enrolled"</span>
            </Show>
            {action}
        </article>
    }
}
