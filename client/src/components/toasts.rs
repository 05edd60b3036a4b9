//! Transient notice stack rendered in a corner of every page.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};
use crate::util::browser::take_pending_notice;

#[cfg(feature = "hydrate")]
const NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        if let Some(notice) = take_pending_notice() {
            notices.update(|n| {
                n.push(notice);
            });
        }
    });

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().entries
                key=|(id, _)| *id
                children=move |(id, notice)| view! { <Toast id=id notice=notice notices=notices/> }
            />
        </div>
    }
}

#[component]
fn Toast(id: u64, notice: Notice, notices: RwSignal<NoticeState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(NOTICE_TTL).await;
        notices.update(|n| n.dismiss(id));
    });

    let is_error = notice.kind == NoticeKind::Error;
    view! {
        <div class="toast" class:toast--error=is_error>
            <span class="toast__message">{notice.message}</span>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| notices.update(|n| n.dismiss(id))>
                "✕"
            </button>
        </div>
    }
}
