//! Error types for Ballot.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ShellError`] - Top-level error type for start-up and mounting
//! - [`MountError`] - Errors locating or writing the mount point
//! - [`RouteTableError`] - Configuration defects in a route table
//! - [`StrictModeError`] - Development-time check violations
//!
//! Builder errors live next to the builder trait as [`RouterBuildError`].
//!
//! [`RouterBuildError`]: crate::RouterBuildError

use thiserror::Error;

/// Top-level error type for all Ballot start-up operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The render target could not be prepared.
    #[error("mount error: {0}")]
    Mount(#[from] MountError),

    /// The route table is misconfigured.
    #[error("routing error: {0}")]
    Routing(#[from] RouteTableError),
}

/// Errors that can occur while mounting the root tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The host document has no element with the requested identifier.
    #[error("mount point `#{id}` was not found in the document")]
    MissingMountPoint {
        /// The identifier that was looked up.
        id: String,
    },
}

/// Configuration defects detected in a route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// The same path pattern is bound more than once.
    #[error("path `{0}` is bound to more than one handler")]
    DuplicatePath(String),

    /// A route names a page that has no registered handler.
    #[error("no handler registered for page `{0}`")]
    MissingHandler(String),
}

/// Violations reported by strict mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrictModeError {
    /// Two consecutive renders of the same tree produced different output.
    #[error("impure render: first pass `{first}`, second pass `{second}`")]
    ImpureRender {
        /// HTML of the first pass.
        first: String,
        /// HTML of the second pass.
        second: String,
    },
}
