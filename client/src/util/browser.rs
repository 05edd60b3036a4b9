//! Browser side effects the session store depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session logic needs a clock, full-page navigation, and a way to show a
//! transient notice, now or after the next page load. `Browser` keeps those behind a trait so the session
//! state machine can be driven by fakes in native tests.

use leptos::prelude::{RwSignal, Update};

use crate::state::notice::{Notice, NoticeState};
use crate::util::storage;

pub trait Browser: Clone + 'static {
    /// Wall-clock time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
    /// Full navigation (page load), discarding all in-memory state.
    fn hard_redirect(&self, path: &str);
    fn notify(&self, notice: Notice);
    /// Show `notice` on the next page load, e.g. the one `hard_redirect` starts.
    fn notify_after_reload(&self, notice: Notice);
}

const PENDING_NOTICE_KEY: &str = "lms_pending_notice";

/// One-shot read of a notice left by the previous page.
pub fn take_pending_notice() -> Option<Notice> {
    let raw = storage::load_string(PENDING_NOTICE_KEY)?;
    storage::remove(PENDING_NOTICE_KEY);
    Notice::from_stored(&raw)
}

/// `Browser` backed by `window` and the app's notice signal.
#[derive(Clone, Copy, Debug)]
pub struct WindowBrowser {
    notices: RwSignal<NoticeState>,
}

impl WindowBrowser {
    pub fn new(notices: RwSignal<NoticeState>) -> Self {
        Self { notices }
    }
}

impl Browser for WindowBrowser {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
        }
    }

    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window.location().set_href(path).is_err() {
                leptos::logging::warn!("full navigation to {path} failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }

    fn notify(&self, notice: Notice) {
        self.notices.update(|n| {
            n.push(notice);
        });
    }

    fn notify_after_reload(&self, notice: Notice) {
        match notice.to_stored() {
            Ok(raw) => storage::save_string(PENDING_NOTICE_KEY, &raw),
            Err(e) => {
                leptos::logging::warn!("could not keep notice for next page: {e}");
                self.notify(notice);
            }
        }
    }
}
