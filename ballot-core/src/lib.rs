//! # ballot-core
//!
//! Core traits for the Ballot client-side routing shell.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! page crates and host integrations that don't need the full `ballot-std`
//! implementation.
//!
//! # Three-Layer Architecture
//!
//! ## Layer 1: Renderables ([`Render`])
//!
//! The unit everything is built from: a page, a wrapper or a router view.
//! Takes no input, returns a [`Node`].
//!
//! ## Layer 2: Resolution ([`Router`])
//!
//! Maps a path to a handler. Pure and side-effect free, so it can be tested
//! without anything being rendered.
//!
//! ## Layer 3: Host ([`Document`], [`MountPoint`])
//!
//! The surface the rendered tree is installed into, passed in explicitly
//! rather than discovered from a global.
//!
//! # Error Types
//!
//! - [`ShellError`] - Top-level error type
//! - [`MountError`] - Mount point errors
//! - [`RouteTableError`] - Route table configuration defects
//! - [`RouterBuildError`] - Router builder errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod mount;
mod navigation;
mod node;
mod render;
mod router;

// Re-exports
pub use error::{MountError, RouteTableError, ShellError, StrictModeError};
pub use mount::{Document, MountPoint};
pub use navigation::{History, NavigationEvent};
pub use node::{Element, Node};
pub use render::{PageHandle, Render, handle};
pub use router::{RouteResult, Router, RouterBuildError, RouterBuilder, validate_path};
