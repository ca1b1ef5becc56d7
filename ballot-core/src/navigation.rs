//! Navigation events and the session history they accumulate in.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

/// A change of the current path.
///
/// The path is kept verbatim; no normalisation happens here or anywhere in
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationEvent {
    path: String,
}

impl NavigationEvent {
    /// Create an event for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The target path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consume the event, returning the path.
    pub fn into_path(self) -> String {
        self.path
    }
}

impl From<&str> for NavigationEvent {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for NavigationEvent {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Shared session history.
///
/// Clones share the same entries, so the router view and the mounted root can
/// each hold a handle. There is always at least one entry: the location the
/// host reported at start-up.
#[derive(Debug, Clone)]
pub struct History {
    entries: Arc<RwLock<Vec<NavigationEvent>>>,
}

impl History {
    /// Start a history at `initial`.
    pub fn new(initial: impl Into<NavigationEvent>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(vec![initial.into()])),
        }
    }

    /// The current location.
    ///
    /// Falls back to `/` if the history has no entries, which [`History::back`]
    /// never allows.
    pub fn current(&self) -> NavigationEvent {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(|| NavigationEvent::new("/"))
    }

    /// Push a new entry, making it current.
    pub fn push(&self, event: impl Into<NavigationEvent>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.into());
    }

    /// Pop the current entry.
    ///
    /// Returns `false` without changing anything when already at the first
    /// entry.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() > 1 {
            entries.pop();
            true
        } else {
            false
        }
    }

    /// Number of entries, including the initial one.
    pub fn depth(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// A snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<NavigationEvent> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
