//! Application start-up.
//!
//! Builds the component tree `StrictMode → AppShell → Routes` over the
//! application route table and mounts it into the host document.

use crate::{config::ShellConfig, pages::PageRegistry, routing::app_routes, shell::AppShell};
use ballot_core::{Document, History, PageHandle, ShellError};
use ballot_std::{
    mount::{MountedRoot, Root},
    observers::LoggingObserver,
    routing::{RouteTable, Routes},
    strict::StrictMode,
};

/// The application's component tree.
pub type AppTree = StrictMode<AppShell<Routes<RouteTable<PageHandle>>>>;

/// The running application, mounted into an element of type `E`.
pub type App<E> = MountedRoot<E, AppTree>;

/// Start the application with the built-in pages.
///
/// The initial render reflects whatever location the document reports.
pub fn start<D: Document>(document: &D, config: &ShellConfig) -> Result<App<D::Element>, ShellError> {
    start_with(document, config, PageRegistry::standard())
}

/// Start the application with a custom page registry.
pub fn start_with<D: Document>(
    document: &D,
    config: &ShellConfig,
    registry: PageRegistry,
) -> Result<App<D::Element>, ShellError> {
    let table = app_routes(&registry)?;
    mount_table(document, config, table)
}

/// Start the application over an arbitrary route table.
///
/// The table is audited according to the configured strict checks before
/// anything is mounted.
pub fn mount_table<D: Document>(
    document: &D,
    config: &ShellConfig,
    table: RouteTable<PageHandle>,
) -> Result<App<D::Element>, ShellError> {
    config.strict().audit(&table)?;

    let history = History::new(document.location());

    #[cfg(feature = "tracing")]
    tracing::info!(
        mount_id = %config.mount_id(),
        location = %history.current(),
        routes = table.len(),
        strict = ?config.strict(),
        "Starting application shell"
    );

    let routes = Routes::new(table, history.clone()).observe(LoggingObserver::named("app"));
    let tree = StrictMode::with_checks(AppShell::new(routes), config.strict());

    Ok(Root::mount(document, config.mount_id(), tree, history)?)
}
