use super::*;

#[test]
fn rejected_credentials_get_generic_message() {
    let message = login_failure_message(&ApiError::Unauthorized { status: 401 });
    assert_eq!(message, "Invalid email or password.");
}

#[test]
fn server_message_is_shown_verbatim() {
    let err = ApiError::Rejected { status: 422, message: "Account locked".to_owned() };
    assert_eq!(login_failure_message(&err), "Account locked");
}

#[test]
fn transport_failures_ask_to_retry() {
    let message = login_failure_message(&ApiError::Network("reset".to_owned()));
    assert_eq!(message, "Could not reach the server. Try again.");
    assert_eq!(login_failure_message(&ApiError::Unavailable), message);
}
