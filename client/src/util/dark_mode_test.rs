use super::*;

#[test]
fn stored_preference_parses_booleans() {
    assert_eq!(stored_preference(Some("true")), Some(true));
    assert_eq!(stored_preference(Some("false")), Some(false));
}

#[test]
fn stored_preference_ignores_garbage_and_absence() {
    assert_eq!(stored_preference(Some("yes")), None);
    assert_eq!(stored_preference(None), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
