//! Logging observer for route resolution.

use super::NavigationObserver;
use ballot_core::NavigationEvent;

/// An observer that logs each resolution.
///
/// Matched paths are logged at `debug`; unmatched paths at `warn`, since the
/// shell then renders nothing. Uses `tracing` when the feature is enabled and
/// is a no-op otherwise.
pub struct LoggingObserver {
    name: &'static str,
}

impl LoggingObserver {
    /// Create a new `LoggingObserver` with a default name.
    pub fn new() -> Self {
        Self { name: "router" }
    }

    /// Create a new `LoggingObserver` with a custom name.
    ///
    /// The name identifies the router view in log messages.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationObserver for LoggingObserver {
    fn on_resolve(&self, event: &NavigationEvent, matched: bool) {
        #[cfg(feature = "tracing")]
        {
            if matched {
                tracing::debug!(name = %self.name, path = %event, "Route matched");
            } else {
                tracing::warn!(name = %self.name, path = %event, "No route matched, rendering nothing");
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, event, matched); // Suppress unused warnings
        }
    }
}
