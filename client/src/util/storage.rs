//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so the API adapter (bearer
//! token) and UI preferences (dark mode, last login email) do not repeat
//! web-sys glue. All helpers are no-ops outside the browser.

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, ignoring quota and privacy-mode failures.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from storage.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage remove failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
