//! # Route Resolution Layer (Router)
//!
//! A Router maps a path to the handler bound to it. Resolution is a pure
//! lookup: it never renders, never mutates, and the same input always yields
//! the same output.
//!
//! This trait abstracts over different routing backends (ordered table,
//! HashMap, phf, matchit) so they can be swapped without changing the
//! router view that consumes them.
//!
//! # Matching
//!
//! Paths are compared as exact, case-sensitive literals. No backend may
//! normalise trailing slashes, letter case, query strings or percent
//! encoding.

use std::borrow::Cow;
use thiserror::Error;

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot route keys of type `{K}`",
    label = "missing `Router` implementation",
    note = "Implement `Router<{K}, {V}>` to resolve paths to handlers."
)]
pub trait Router<K: ?Sized, V>: Send + Sync + 'static {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

/// Error type for router building operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// A duplicate key was inserted.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    /// The path is not an absolute literal path.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Builder for constructing path routers.
///
/// This trait allows different router implementations to be built
/// using a common interface.
pub trait RouterBuilder<V>: Default + Send {
    /// The router type this builder produces.
    type Router: Router<str, V>;

    /// Bind a path to a handler.
    ///
    /// Returns an error if the path is malformed or already bound.
    fn insert(
        &mut self,
        path: impl Into<Cow<'static, str>>,
        value: V,
    ) -> Result<(), RouterBuildError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RouterBuildError>;
}

/// Check that a path pattern is an absolute literal path.
///
/// Patterns must be non-empty and start with `/`. Whitespace is rejected
/// because the host location never contains it unencoded.
pub fn validate_path(path: &str) -> Result<(), RouterBuildError> {
    if !path.starts_with('/') {
        return Err(RouterBuildError::InvalidPath(format!(
            "`{}` must start with `/`",
            path
        )));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(RouterBuildError::InvalidPath(format!(
            "`{}` contains whitespace",
            path
        )));
    }
    Ok(())
}
