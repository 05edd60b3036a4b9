//! Browser scheduling for the session store's background loops.
//!
//! SYSTEM CONTEXT
//! ==============
//! While an identity is present, three `gloo-timers` intervals drive the
//! refresh, liveness and inactivity ticks, two window listeners record
//! user activity, and a `storage` listener follows sign-outs in other tabs.
//! `SessionTimers` owns every handle; dropping it clears the intervals and
//! removes the listeners. `util::timer_slot` decides when that happens.

use std::future::Future;
use std::time::Duration;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::api;
use crate::state::session::{INACTIVITY_CHECK_INTERVAL, LIVENESS_INTERVAL, REFRESH_INTERVAL};
use crate::util::timer_slot::{clear_slot, sync_slot};

pub struct SessionTimers {
    intervals: Vec<Interval>,
    listeners: Vec<WindowListenerHandle>,
}

fn millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX)
}

/// Run `tick` as a local task every `period`.
fn spawn_every<F, Fut>(period: Duration, tick: F) -> Interval
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    Interval::new(millis(period), move || leptos::task::spawn_local(tick()))
}

impl SessionTimers {
    pub fn start(session: &AppSession) -> Self {
        let refresh = {
            let session = session.clone();
            spawn_every(REFRESH_INTERVAL, move || {
                let session = session.clone();
                async move { session.refresh_tick().await }
            })
        };
        let liveness = {
            let session = session.clone();
            spawn_every(LIVENESS_INTERVAL, move || {
                let session = session.clone();
                async move { session.liveness_tick().await }
            })
        };
        let inactivity = {
            let session = session.clone();
            spawn_every(INACTIVITY_CHECK_INTERVAL, move || {
                let session = session.clone();
                async move { session.inactivity_tick().await }
            })
        };

        let on_pointer = {
            let session = session.clone();
            window_event_listener(leptos::ev::pointermove, move |_| session.record_activity())
        };
        let on_key = {
            let session = session.clone();
            window_event_listener(leptos::ev::keydown, move |_| session.record_activity())
        };

        let on_storage = {
            let session = session.clone();
            window_event_listener(leptos::ev::storage, move |ev| {
                if api::token_cleared(ev.key().as_deref(), ev.new_value().as_deref()) {
                    session.signed_out_elsewhere();
                }
            })
        };

        Self {
            intervals: vec![refresh, liveness, inactivity],
            listeners: vec![on_pointer, on_key, on_storage],
        }
    }

}

impl Drop for SessionTimers {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        self.intervals.clear();
    }
}

/// Restore the session once, then keep timers running exactly while an
/// identity is present. Everything is torn down with the owning scope.
pub fn install(session: AppSession) {
    let timers = StoredValue::new_local(None::<SessionTimers>);

    let restoring = session.clone();
    leptos::task::spawn_local(async move { restoring.restore().await });

    let auth = *session.auth();
    Effect::new(move || {
        let signed_in = auth.with(|a| a.identity.is_some());
        timers.update_value(|slot| sync_slot(slot, signed_in, || SessionTimers::start(&session)));
    });

    on_cleanup(move || {
        timers.try_update_value(clear_slot);
    });
}
