//! Theme preference: read, apply, toggle.
//!
//! The preference lives in `localStorage` (via `util::storage`) and is
//! applied as a `data-theme` attribute on `<html>`. Server rendering always
//! sees the light theme; hydration corrects it on the first client pass.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "lms_dark_mode";

fn stored_preference(raw: Option<&str>) -> Option<bool> {
    match raw? {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Stored preference, else the system color scheme, else light.
pub fn read_preference() -> bool {
    if let Some(enabled) = stored_preference(storage::load_string(STORAGE_KEY).as_deref()) {
        return enabled;
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if el.set_attribute("data-theme", if enabled { "dark" } else { "light" }).is_err() {
            leptos::logging::warn!("failed to apply theme");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
