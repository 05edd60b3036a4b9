use super::*;

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("/api", "/auth/me"), "/api/auth/me");
    assert_eq!(endpoint("https://lms.example.com/api/", "auth/me"), "https://lms.example.com/api/auth/me");
    assert_eq!(endpoint("/api/", "/courses"), "/api/courses");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn resource_paths_embed_ids() {
    assert_eq!(course_enroll_path("c1"), "/courses/c1/enroll");
    assert_eq!(user_path("u7"), "/users/u7");
    assert_eq!(user_role_path("u7"), "/users/u7/role");
}

#[test]
fn oauth_entry_url_is_under_api_base() {
    let url = oauth_entry_url();
    assert!(url.starts_with(API_BASE.trim_end_matches('/')));
    assert!(url.ends_with("/auth/google"));
}

#[test]
fn token_cleared_only_for_token_removal() {
    assert!(token_cleared(Some(TOKEN_KEY), None));
    assert!(token_cleared(None, None));
    assert!(!token_cleared(Some(TOKEN_KEY), Some("fresh")));
    assert!(!token_cleared(Some("lms_dark_mode"), None));
}

#[test]
fn parse_body_treats_empty_as_object() {
    let resp: RefreshResponse = parse_body("  ").unwrap();
    assert_eq!(resp.token, None);
}

#[test]
fn parse_body_reports_decode_errors() {
    let err = parse_body::<Vec<Course>>("{\"not\":\"a list\"}").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(fetch_current_user());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_outside_browser_still_reports_failure() {
    let result = futures::executor::block_on(logout());
    assert_eq!(result, Err(ApiError::Unavailable));
}
