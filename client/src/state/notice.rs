//! Transient user-visible notices (toasts).
//!
//! DESIGN
//! ======
//! Failures that must not block the user (server logout, optimistic updates
//! that were rolled back) are reported here and auto-dismissed by the
//! `Toasts` component. A notice raised right before a full page load is
//! stored as JSON and shown by the next page instead.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    /// Encoding used to carry a notice across a page load.
    pub fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a carried notice; anything unreadable is dropped.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(notice) => Some(notice),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable pending notice: {e}");
                None
            }
        }
    }
}

/// Notices currently on screen, oldest first, each with a stable id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub entries: Vec<(u64, Notice)>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return the id used to dismiss it.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, notice));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }
}
