//! The application route table.

use crate::pages::{Page, PageRegistry};
use ballot_core::{PageHandle, RouteTableError};
use ballot_macros::routes;
use ballot_std::routing::{Route, RouteTable};

/// Every route the application serves, in declaration order.
///
/// Paths are checked at compile time: a repeated or malformed path does not
/// build.
pub const APP_ROUTES: [(&str, Page); 6] = routes! {
    "/" => Page::Home,
    "/signin" => Page::SignIn,
    "/signup" => Page::SignUp,
    "/resetpassword" => Page::ResetPassword,
    "/voting" => Page::Voting,
    "/results" => Page::Results,
};

/// The route table of page monikers.
pub fn page_routes() -> RouteTable<Page> {
    RouteTable::from_routes(
        APP_ROUTES
            .into_iter()
            .map(|(path, page)| Route::new(path, page)),
    )
}

/// Build the runtime route table, binding every path to the handler
/// registered for its page.
///
/// Fails with [`RouteTableError::MissingHandler`] if a routed page has no
/// handler in `registry`.
pub fn app_routes(registry: &PageRegistry) -> Result<RouteTable<PageHandle>, RouteTableError> {
    page_routes().try_map(|page| {
        registry
            .get(page)
            .cloned()
            .ok_or_else(|| RouteTableError::MissingHandler(page.moniker().to_owned()))
    })
}

/// The path a page is served at.
pub fn path_of(page: Page) -> Option<&'static str> {
    APP_ROUTES
        .into_iter()
        .find(|(_, p)| *p == page)
        .map(|(path, _)| path)
}
