//! Testing utilities for Ballot.
//!
//! This module provides stand-in pages and observers for testing routers and
//! mounts without real page implementations.
//!
//! # Features
//!
//! - [`StaticPage`]: Renders a fixed tree
//! - [`CountingPage`]: Counts how often it is rendered
//! - [`FlakyPage`]: Renders differently every time, to trip strict mode
//! - [`RecordingObserver`]: Records every route resolution

use crate::observers::NavigationObserver;
use ballot_core::{NavigationEvent, Node, Render};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Static Page
// ============================================================================

/// A page that always renders the same tree.
#[derive(Debug, Clone)]
pub struct StaticPage {
    node: Node,
}

impl StaticPage {
    /// Render `node` on every call.
    pub fn new(node: impl Into<Node>) -> Self {
        Self { node: node.into() }
    }

    /// Render a single text node.
    pub fn text(text: &str) -> Self {
        Self::new(Node::text(text))
    }
}

impl Render for StaticPage {
    fn render(&self) -> Node {
        self.node.clone()
    }
}

// ============================================================================
// Counting Page
// ============================================================================

/// A page that counts its renders.
///
/// Clones share the counter.
///
/// # Example
///
/// ```rust,ignore
/// let page = CountingPage::new("home");
/// let handle = ballot_core::handle(page.clone());
///
/// // Mount, navigate...
///
/// assert_eq!(page.count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CountingPage {
    label: &'static str,
    count: Arc<AtomicUsize>,
}

impl CountingPage {
    /// Create a page rendering `<p>{label}</p>`.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of renders so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// The tree this page renders.
    pub fn node(&self) -> Node {
        Node::element("p").child(self.label).into()
    }
}

impl Render for CountingPage {
    fn render(&self) -> Node {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.node()
    }
}

// ============================================================================
// Flaky Page
// ============================================================================

/// A page whose output changes on every render.
#[derive(Debug, Clone, Default)]
pub struct FlakyPage {
    renders: Arc<AtomicUsize>,
}

impl FlakyPage {
    /// Create a new flaky page.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Render for FlakyPage {
    fn render(&self) -> Node {
        let n = self.renders.fetch_add(1, Ordering::SeqCst);
        Node::text(format!("render #{}", n))
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records `(path, matched)` for every resolution.
///
/// Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    resolutions: Arc<Mutex<Vec<(String, bool)>>>,
}

impl RecordingObserver {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded resolutions.
    pub fn resolutions(&self) -> Vec<(String, bool)> {
        self.resolutions.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Get the number of recorded resolutions.
    pub fn count(&self) -> usize {
        self.resolutions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Clear all recorded resolutions.
    pub fn clear(&self) {
        self.resolutions.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl NavigationObserver for RecordingObserver {
    fn on_resolve(&self, event: &NavigationEvent, matched: bool) {
        self.resolutions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event.path().to_owned(), matched));
    }
}
