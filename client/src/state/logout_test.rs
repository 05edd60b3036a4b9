use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::state::notice::NoticeKind;
use crate::state::test_support::{FakeBackend, FakeBrowser, unauthorized};

#[test]
fn successful_logout_redirects_home_without_notice() {
    let backend = FakeBackend::new(Err(unauthorized()));
    let browser = FakeBrowser::default();
    block_on(sign_out(&backend, &browser));
    assert_eq!(*browser.redirects.borrow(), vec![paths::HOME.to_owned()]);
    assert!(browser.notices.borrow().is_empty());
    assert!(browser.pending.borrow().is_empty());
}

#[test]
fn failed_logout_keeps_notice_for_the_page_after_redirect() {
    let backend = FakeBackend::new(Err(unauthorized()));
    backend.script().logout = Err(ApiError::Rejected { status: 500, message: "down".to_owned() });
    let browser = FakeBrowser::default();
    block_on(sign_out(&backend, &browser));
    assert_eq!(*browser.redirects.borrow(), vec![paths::HOME.to_owned()]);
    assert!(browser.notices.borrow().is_empty());
    let pending = browser.pending.borrow();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].kind, NoticeKind::Error);
    assert_eq!(pending[0].message, LOGOUT_FAILED_MESSAGE);
}

#[test]
fn sign_out_calls_server_exactly_once() {
    let backend = FakeBackend::new(Err(unauthorized()));
    let browser = FakeBrowser::default();
    block_on(sign_out(&backend, &browser));
    assert_eq!(backend.script().logout_calls, 1);
}
