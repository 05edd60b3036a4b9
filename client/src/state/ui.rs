//! Local UI chrome state (theme, navigation drawer).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of session state so the navigation bar
//! can evolve independently of auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the collapsed (narrow-screen) navigation menu is expanded.
    pub nav_open: bool,
}

impl UiState {
    /// Initial state honoring the persisted theme preference.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, ..Self::default() }
    }
}
