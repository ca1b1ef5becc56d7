//! Navigation observers.
//!
//! An observer is told about every resolution the router view performs. It
//! cannot change the outcome.

mod logging;

pub use logging::LoggingObserver;

use ballot_core::NavigationEvent;

/// Receives the outcome of each route resolution.
pub trait NavigationObserver: Send + Sync + 'static {
    /// Called once per resolution, with whether any route matched.
    fn on_resolve(&self, event: &NavigationEvent, matched: bool);
}
