//! # ballot - Client-Side Routing Shell
//!
//! `ballot` mounts the voting application into a host document and switches
//! between its pages by path.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ballot::prelude::*;
//!
//! let document = MemoryDocument::new().with_location("/voting").with_element("root");
//! let mut app = ballot::start(&document, &ShellConfig::default())?;
//!
//! app.navigate("/results");
//! ```
//!
//! ## Routes
//!
//! | Path             | Page          |
//! |------------------|---------------|
//! | `/`              | Home          |
//! | `/signin`        | SignIn        |
//! | `/signup`        | SignUp        |
//! | `/resetpassword` | ResetPassword |
//! | `/voting`        | Voting        |
//! | `/results`       | Results       |
//!
//! Matching is exact and case-sensitive. Any other path renders an empty
//! shell.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod pages;
pub mod routing;
pub mod shell;

pub use app::{App, AppTree, mount_table, start, start_with};
pub use config::{DEFAULT_MOUNT_ID, ShellConfig};
pub use pages::{Page, PageRegistry};
pub use routing::{APP_ROUTES, app_routes};
pub use shell::AppShell;

pub use ballot_core::{
    Document, Element, History, MountError, MountPoint, NavigationEvent, Node,
    PageHandle, Render, RouteResult, RouteTableError, Router, RouterBuildError, RouterBuilder,
    ShellError, StrictModeError, handle,
};

pub use ballot_macros::routes;

pub use ballot_std::{
    memory::{MemoryDocument, MemoryElement},
    mount::{MountedRoot, Root},
    observers::{LoggingObserver, NavigationObserver},
    routing::{HashMapRouter, HashMapRouterBuilder, Route, RouteTable, RouteTableBuilder, Routes},
    strict::{StrictChecks, StrictMode},
};

#[cfg(feature = "matchit")]
pub use ballot_std::routing::{MatchitRouter, MatchitRouterBuilder};
#[cfg(feature = "phf")]
pub use ballot_std::routing::PhfRouter;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use ballot_std::testing::*;
}

/// Prelude module - common imports for Ballot.
///
/// # Usage
///
/// ```rust,ignore
/// use ballot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Host
        Document,
        MemoryDocument,
        MountPoint,
        NavigationEvent,
        // Rendering
        Node,
        // Pages
        Page,
        PageRegistry,
        Render,
        // Routing
        RouteTable,
        Router,
        RouterBuilder,
        // Errors
        ShellError,
        // Config
        ShellConfig,
        StrictChecks,
    };
}
