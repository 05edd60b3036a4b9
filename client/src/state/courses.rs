//! In-memory course list edits used for optimistic UI updates.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::Course;

/// Set the `enrolled` flag on `course_id`. Returns the previous value, or
/// `None` when the course is not in the list.
pub fn set_enrolled(courses: &mut [Course], course_id: &str, enrolled: bool) -> Option<bool> {
    let course = courses.iter_mut().find(|c| c.id == course_id)?;
    Some(std::mem::replace(&mut course.enrolled, enrolled))
}

/// Put a newly created course at the top, replacing any stale copy.
pub fn prepend(courses: &mut Vec<Course>, course: Course) {
    courses.retain(|c| c.id != course.id);
    courses.insert(0, course);
}
