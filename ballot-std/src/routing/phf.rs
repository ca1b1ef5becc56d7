//! PHF-based router implementation.
//!
//! Provides compile-time perfect hash map routing.
//! This router is immutable and must be constructed with a static map reference.

use ballot_core::{RouteResult, Router};

/// A router based on `phf::Map`.
///
/// Wraps a static reference to a PHF map.
pub struct PhfRouter<V: 'static> {
    map: &'static phf::Map<&'static str, V>,
}

impl<V: Send + Sync + 'static> PhfRouter<V> {
    /// Create a new router from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, V>) -> Self {
        Self { map }
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for PhfRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

// RouterBuilder is not implemented for PhfRouter: the map is fixed at
// compile time and `phf_map!` already rejects duplicate keys.

#[cfg(test)]
mod tests {
    use super::PhfRouter;
    use ballot_core::{RouteResult, Router};
    use phf::phf_map;

    static PAGES: phf::Map<&'static str, &'static str> = phf_map! {
        "/" => "Home",
        "/voting" => "Voting",
        "/results" => "Results",
    };

    #[test]
    fn test_phf_router() {
        let router = PhfRouter::new(&PAGES);

        assert_eq!(router.route("/"), RouteResult::Matched(&"Home"));
        assert_eq!(router.route("/voting"), RouteResult::Matched(&"Voting"));
        assert_eq!(router.route("/VOTING"), RouteResult::NotFound);
        assert_eq!(router.len(), 3);
    }
}
