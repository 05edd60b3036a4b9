//! In-memory fakes for driving `Session` in native tests.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use super::auth::{AuthCell, AuthState};
use super::notice::Notice;
use super::session::{AuthBackend, Session};
use crate::net::error::ApiError;
use crate::net::types::{Identity, Role};
use crate::util::browser::Browser;

pub type TestSession = Session<Rc<RefCell<AuthState>>, FakeBackend, FakeBrowser>;

impl AuthCell for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn update_auth(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

pub fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role,
        avatar: None,
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Unauthorized { status: 401 }
}

/// Pending on first poll, ready on the second.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Debug)]
pub struct BackendScript {
    pub me: Result<Identity, ApiError>,
    pub refresh: Result<(), ApiError>,
    pub logout: Result<(), ApiError>,
    /// Make `logout` suspend once so concurrent callers can interleave.
    pub slow_logout: bool,
    /// Make `current_identity` suspend once before answering.
    pub slow_me: bool,
    pub me_calls: usize,
    pub refresh_calls: usize,
    pub logout_calls: usize,
}

#[derive(Clone, Debug)]
pub struct FakeBackend(pub Rc<RefCell<BackendScript>>);

impl FakeBackend {
    pub fn new(me: Result<Identity, ApiError>) -> Self {
        Self(Rc::new(RefCell::new(BackendScript {
            me,
            refresh: Ok(()),
            logout: Ok(()),
            slow_logout: false,
            slow_me: false,
            me_calls: 0,
            refresh_calls: 0,
            logout_calls: 0,
        })))
    }

    pub fn script(&self) -> std::cell::RefMut<'_, BackendScript> {
        self.0.borrow_mut()
    }
}

impl AuthBackend for FakeBackend {
    async fn current_identity(&self) -> Result<Identity, ApiError> {
        let slow = {
            let mut s = self.0.borrow_mut();
            s.me_calls += 1;
            s.slow_me
        };
        if slow {
            YieldOnce(false).await;
        }
        self.0.borrow().me.clone()
    }

    async fn refresh_token(&self) -> Result<(), ApiError> {
        let mut s = self.0.borrow_mut();
        s.refresh_calls += 1;
        s.refresh.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let slow = {
            let mut s = self.0.borrow_mut();
            s.logout_calls += 1;
            s.slow_logout
        };
        if slow {
            YieldOnce(false).await;
        }
        self.0.borrow().logout.clone()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeBrowser {
    pub now: Rc<Cell<f64>>,
    pub redirects: Rc<RefCell<Vec<String>>>,
    pub notices: Rc<RefCell<Vec<Notice>>>,
    /// Notices handed to the next page load.
    pub pending: Rc<RefCell<Vec<Notice>>>,
}

impl FakeBrowser {
    pub fn advance_minutes(&self, minutes: f64) {
        self.now.set(self.now.get() + minutes * 60_000.0);
    }
}

impl Browser for FakeBrowser {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn hard_redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn notify_after_reload(&self, notice: Notice) {
        self.pending.borrow_mut().push(notice);
    }
}

pub fn session(me: Result<Identity, ApiError>) -> (TestSession, FakeBackend, FakeBrowser) {
    let backend = FakeBackend::new(me);
    let browser = FakeBrowser::default();
    let session = Session::new(
        Rc::new(RefCell::new(AuthState::booting())),
        backend.clone(),
        browser.clone(),
    );
    (session, backend, browser)
}
