//! Instructor workspace: own courses and the create-course form.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::course_card::CourseCard;
use crate::components::field_error::FieldError;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Course;
use crate::state::courses::prepend;
use crate::state::listing::Listing;
use crate::state::notice::Notice;
use crate::util::browser::Browser;
use crate::util::validate::{Field, FieldErrors, MAX_DESCRIPTION_LEN, validate_new_course};

use super::{listing_status, load_listing};

#[component]
pub fn InstructorPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let courses = RwSignal::new(Listing::<Course>::default());
    load_listing(courses, session.clone(), api::instructor_courses());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let draft = match validate_new_course(&title.get_untracked(), &description.get_untracked()) {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match api::create_course(&draft).await {
                Ok(course) => {
                    courses.update(|l| {
                        l.error = None;
                        prepend(&mut l.items, course);
                    });
                    title.set(String::new());
                    description.set(String::new());
                    session.browser().notify(Notice::info("Course created."));
                }
                Err(ApiError::Rejected { message, .. }) => failure.set(Some(message)),
                Err(e) => {
                    failure.set(Some(format!("Could not create course: {e}")));
                    session.on_api_error(&e).await;
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page instructor-page">
            <header class="page__header">
                <h1>"My teaching"</h1>
            </header>
            <section class="panel">
                <h2 class="panel__title">"New course"</h2>
                <Show when=move || failure.get().is_some()>
                    <p class="page__error" role="alert">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit novalidate>
                    <label class="form__label">
                        "Title"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=errors field=Field::Title/>
                    <label class="form__label">
                        "Description"
                        <textarea
                            class="form__input form__input--area"
                            rows="5"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <p class="form__hint">
                        {move || format!("{} / {MAX_DESCRIPTION_LEN}", description.get().trim().chars().count())}
                    </p>
                    <FieldError errors=errors field=Field::Description/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create course" }}
                    </button>
                </form>
            </section>
            <h2 class="page__section">"Courses I teach"</h2>
            {listing_status(courses, "You have not created any courses yet.")}
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
