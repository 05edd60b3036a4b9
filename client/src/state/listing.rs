//! Load state for a server-provided list shown on a page.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Items plus load progress, mirroring one list endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> Listing<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, loading: false, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { items: Vec::new(), loading: false, error: Some(message.into()) }
    }

    /// Loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
