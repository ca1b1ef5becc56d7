//! Development-time checks.
//!
//! [`StrictMode`] wraps a subtree and checks invariants that the type system
//! cannot: that rendering is pure, and that the route table is unambiguous.
//! It never changes what is rendered.

use ballot_core::{Node, Render, RouteTableError, StrictModeError};
use bitflags::bitflags;
use std::sync::{Mutex, PoisonError};

use crate::routing::RouteTable;

bitflags! {
    /// Which strict-mode checks are enabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StrictChecks: u8 {
        /// Render the subtree twice and compare the outputs.
        const DOUBLE_RENDER = 1 << 0;
        /// Refuse to start with a route table that binds a path twice.
        const UNIQUE_ROUTES = 1 << 1;
    }
}

impl Default for StrictChecks {
    fn default() -> Self {
        StrictChecks::all()
    }
}

impl StrictChecks {
    /// Audit a route table according to the enabled checks.
    pub fn audit<V>(self, table: &RouteTable<V>) -> Result<(), RouteTableError> {
        if self.contains(StrictChecks::UNIQUE_ROUTES) {
            table.ensure_unique()?;
        }
        Ok(())
    }
}

/// A wrapper that runs strict-mode checks on its child.
///
/// Output is always the child's first render, whether or not a check fails.
/// Violations are logged and kept for inspection.
pub struct StrictMode<T> {
    child: T,
    checks: StrictChecks,
    violations: Mutex<Vec<StrictModeError>>,
}

impl<T: Render> StrictMode<T> {
    /// Wrap `child` with every check enabled.
    pub fn new(child: T) -> Self {
        Self::with_checks(child, StrictChecks::all())
    }

    /// Wrap `child` with a specific set of checks.
    pub fn with_checks(child: T, checks: StrictChecks) -> Self {
        Self {
            child,
            checks,
            violations: Mutex::new(Vec::new()),
        }
    }

    /// The enabled checks.
    pub fn checks(&self) -> StrictChecks {
        self.checks
    }

    /// The wrapped child.
    pub fn child(&self) -> &T {
        &self.child
    }

    /// Render the child and run the render checks, without recording.
    pub fn check(&self) -> Result<Node, StrictModeError> {
        let (node, violation) = self.render_checked();
        match violation {
            Some(err) => Err(err),
            None => Ok(node),
        }
    }

    /// Violations recorded by previous renders, oldest first.
    pub fn violations(&self) -> Vec<StrictModeError> {
        self.violations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn render_checked(&self) -> (Node, Option<StrictModeError>) {
        let first = self.child.render();
        if !self.checks.contains(StrictChecks::DOUBLE_RENDER) {
            return (first, None);
        }
        let second = self.child.render();
        if first == second {
            (first, None)
        } else {
            let err = StrictModeError::ImpureRender {
                first: first.to_html(),
                second: second.to_html(),
            };
            (first, Some(err))
        }
    }
}

impl<T: Render> Render for StrictMode<T> {
    fn render(&self) -> Node {
        let (node, violation) = self.render_checked();
        if let Some(err) = violation {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "Strict mode violation");

            self.violations
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(err);
        }
        node
    }
}
