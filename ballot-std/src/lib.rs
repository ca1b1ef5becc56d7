//! # ballot-std
//!
//! Standard implementations for the Ballot client-side routing shell.
//!
//! This crate provides:
//! - **Routing**: [`RouteTable`], [`HashMapRouter`], optional `PhfRouter` and
//!   `MatchitRouter` backends, and the [`Routes`] router view
//! - **Mounting**: [`Root`] and [`MountedRoot`]
//! - **Strict mode**: [`StrictMode`] and [`StrictChecks`]
//! - **Hosts**: [`MemoryDocument`], a headless document
//! - **Observers**: [`LoggingObserver`]
//! - **Testing**: stand-in pages and a recording observer
//!
//! [`RouteTable`]: routing::RouteTable
//! [`HashMapRouter`]: routing::HashMapRouter
//! [`Routes`]: routing::Routes
//! [`Root`]: mount::Root
//! [`MountedRoot`]: mount::MountedRoot
//! [`StrictMode`]: strict::StrictMode
//! [`StrictChecks`]: strict::StrictChecks
//! [`MemoryDocument`]: memory::MemoryDocument
//! [`LoggingObserver`]: observers::LoggingObserver

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use ballot_core;

// Modules
pub mod memory;
pub mod mount;
pub mod observers;
pub mod routing;
pub mod strict;
pub mod testing;
