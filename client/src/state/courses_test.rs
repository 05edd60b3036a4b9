use super::*;

fn course(id: &str, enrolled: bool) -> Course {
    Course {
        id: id.to_owned(),
        title: format!("Course {id}"),
        description: String::new(),
        instructor_name: None,
        enrolled,
    }
}

#[test]
fn set_enrolled_returns_previous_flag() {
    let mut list = vec![course("a", false), course("b", true)];
    assert_eq!(set_enrolled(&mut list, "a", true), Some(false));
    assert!(list[0].enrolled);
    assert!(list[1].enrolled);
}

#[test]
fn set_enrolled_revert_restores_original() {
    let mut list = vec![course("a", false)];
    let previous = set_enrolled(&mut list, "a", true).unwrap();
    set_enrolled(&mut list, "a", previous);
    assert!(!list[0].enrolled);
}

#[test]
fn set_enrolled_missing_course_is_none() {
    let mut list = vec![course("a", false)];
    assert_eq!(set_enrolled(&mut list, "zzz", true), None);
}

#[test]
fn prepend_inserts_first_and_dedupes() {
    let mut list = vec![course("a", false), course("b", false)];
    prepend(&mut list, course("b", true));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "b");
    assert!(list[0].enrolled);
}
