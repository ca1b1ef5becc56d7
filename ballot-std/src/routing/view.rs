//! The router view.
//!
//! [`Routes`] is the component that sits in the tree where the current page
//! goes. On every render it reads the current location from the shared
//! [`History`], resolves it against its router and renders the matched
//! handler.
//!
//! # Unmatched paths
//!
//! No catch-all is registered by default. An unmatched path renders
//! [`Node::Empty`], so the surrounding shell shows an empty region.

use crate::observers::NavigationObserver;
use ballot_core::{History, Node, PageHandle, Render, RouteResult, Router};
use std::sync::Arc;

/// Renders whichever handler the current location resolves to.
pub struct Routes<R> {
    router: R,
    history: History,
    observers: Vec<Arc<dyn NavigationObserver>>,
}

impl<R> Routes<R>
where
    R: Router<str, PageHandle>,
{
    /// Create a view over `router` that follows `history`.
    pub fn new(router: R, history: History) -> Self {
        Self {
            router,
            history,
            observers: Vec::new(),
        }
    }

    /// Attach an observer. Observers are notified in attachment order.
    pub fn observe<O: NavigationObserver>(mut self, observer: O) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Resolve `path` without rendering or notifying observers.
    pub fn resolve(&self, path: &str) -> Option<&PageHandle> {
        self.router.route(path).matched()
    }

    /// The underlying router.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// The history this view follows.
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl<R> Render for Routes<R>
where
    R: Router<str, PageHandle>,
{
    fn render(&self) -> Node {
        let location = self.history.current();
        let result = self.router.route(location.path());
        for observer in &self.observers {
            observer.on_resolve(&location, result.is_matched());
        }
        match result {
            RouteResult::Matched(handler) => handler.render(),
            RouteResult::NotFound => Node::Empty,
        }
    }
}
