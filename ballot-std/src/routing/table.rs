//! Ordered route table.
//!
//! The default router: a `Vec` of routes scanned in insertion order, first
//! match wins. Small fixed tables like an application's page list are faster
//! to scan than to hash, and keeping the order makes the table printable in
//! the order it was declared.

use ballot_core::{
    RouteResult, RouteTableError, Router, RouterBuildError, RouterBuilder, validate_path,
};
use std::{borrow::Cow, collections::HashSet};

/// An immutable (path pattern, handler) binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: Cow<'static, str>,
    handler: V,
}

impl<V> Route<V> {
    /// Bind `path` to `handler`.
    pub fn new(path: impl Into<Cow<'static, str>>, handler: V) -> Self {
        Self {
            path: path.into(),
            handler,
        }
    }

    /// The path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The bound handler.
    pub fn handler(&self) -> &V {
        &self.handler
    }
}

/// An ordered sequence of routes.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Start a checked builder.
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::default()
    }

    /// Create a table from routes without any validation.
    ///
    /// Order is preserved. Use [`RouteTable::duplicates`] to audit the result.
    pub fn from_routes(routes: impl IntoIterator<Item = Route<V>>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
        }
    }

    /// Look up the handler bound to exactly `path`.
    pub fn lookup(&self, path: &str) -> Option<&V> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| &route.handler)
    }

    /// Iterate over the routes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route<V>> {
        self.routes.iter()
    }

    /// The path patterns in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(Route::path)
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Patterns bound more than once, each reported once in first-seen order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for path in self.paths() {
            if !seen.insert(path) && reported.insert(path) {
                duplicates.push(path);
            }
        }
        duplicates
    }

    /// Fail on the first pattern that is bound more than once.
    pub fn ensure_unique(&self) -> Result<(), RouteTableError> {
        match self.duplicates().first() {
            Some(path) => Err(RouteTableError::DuplicatePath((*path).to_owned())),
            None => Ok(()),
        }
    }

    /// Transform every handler, keeping paths and order.
    pub fn try_map<W, E>(self, mut f: impl FnMut(V) -> Result<W, E>) -> Result<RouteTable<W>, E> {
        let routes = self
            .routes
            .into_iter()
            .map(|route| {
                Ok(Route {
                    path: route.path,
                    handler: f(route.handler)?,
                })
            })
            .collect::<Result<Vec<_>, E>>()?;
        Ok(RouteTable { routes })
    }
}

impl<'a, V> IntoIterator for &'a RouteTable<V> {
    type Item = &'a Route<V>;
    type IntoIter = std::slice::Iter<'a, Route<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Router<str, V> for RouteTable<V>
where
    V: Send + Sync + 'static,
{
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.lookup(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// Builder for [`RouteTable`].
pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
    allow_duplicates: bool,
}

impl<V> RouteTableBuilder<V> {
    /// Accept repeated patterns. The earliest binding wins on lookup.
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Chaining form of [`RouterBuilder::insert`].
    pub fn route(
        mut self,
        path: impl Into<Cow<'static, str>>,
        handler: V,
    ) -> Result<Self, RouterBuildError>
    where
        V: Send + Sync + 'static,
    {
        self.insert(path, handler)?;
        Ok(self)
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            allow_duplicates: false,
        }
    }
}

impl<V> RouterBuilder<V> for RouteTableBuilder<V>
where
    V: Send + Sync + 'static,
{
    type Router = RouteTable<V>;

    fn insert(
        &mut self,
        path: impl Into<Cow<'static, str>>,
        value: V,
    ) -> Result<(), RouterBuildError> {
        let path = path.into();
        validate_path(&path)?;
        if !self.allow_duplicates && self.routes.iter().any(|route| route.path == path) {
            return Err(RouterBuildError::DuplicateKey(path.into_owned()));
        }
        self.routes.push(Route::new(path, value));
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, RouteTable, RouteTableBuilder};
    use ballot_core::{RouteResult, RouteTableError, Router, RouterBuildError, RouterBuilder};

    fn sample() -> RouteTable<i32> {
        let mut builder = RouteTable::builder();
        builder.insert("/", 0).unwrap();
        builder.insert("/signin", 1).unwrap();
        builder.insert("/voting", 2).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_basic_routing() {
        let table = sample();

        assert_eq!(table.route("/").matched(), Some(&0));
        assert_eq!(table.route("/signin").matched(), Some(&1));
        assert_eq!(table.route("/voting").matched(), Some(&2));
        assert_eq!(table.route("/results"), RouteResult::NotFound);
    }

    #[test]
    fn test_exact_and_case_sensitive() {
        let table = sample();

        assert!(!table.contains("/Voting"));
        assert!(!table.contains("/voting/"));
        assert!(!table.contains("voting"));
        assert!(!table.contains("/voting?round=1"));
        assert!(!table.contains(""));
    }

    #[test]
    fn test_declaration_order_kept() {
        let table = sample();
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/", "/signin", "/voting"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_duplicate_key_error() {
        let mut builder: RouteTableBuilder<i32> = RouteTableBuilder::default();
        builder.insert("/voting", 1).unwrap();

        let result = builder.insert("/voting", 2);
        assert_eq!(
            result,
            Err(RouterBuildError::DuplicateKey("/voting".to_string()))
        );
    }

    #[test]
    fn test_invalid_path_error() {
        let mut builder: RouteTableBuilder<i32> = RouteTableBuilder::default();
        assert!(matches!(
            builder.insert("voting", 1),
            Err(RouterBuildError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_allow_duplicates_first_wins() {
        let table = RouteTable::builder()
            .allow_duplicates()
            .route("/voting", 1)
            .unwrap()
            .route("/voting", 2)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(table.route("/voting").matched(), Some(&1));
        assert_eq!(table.duplicates(), vec!["/voting"]);
    }

    #[test]
    fn test_unchecked_table_audit() {
        let table = RouteTable::from_routes([
            Route::new("/", 0),
            Route::new("/signin", 1),
            Route::new("/", 2),
            Route::new("/signin", 3),
            Route::new("/", 4),
        ]);

        assert_eq!(table.duplicates(), vec!["/", "/signin"]);
        assert_eq!(
            table.ensure_unique(),
            Err(RouteTableError::DuplicatePath("/".to_string()))
        );
        assert!(sample().ensure_unique().is_ok());
    }

    #[test]
    fn test_try_map_keeps_order() {
        let table = sample();
        let mapped: RouteTable<String> = table
            .try_map(|v| Ok::<_, ()>(format!("h{}", v)))
            .unwrap();
        assert_eq!(mapped.lookup("/signin").map(String::as_str), Some("h1"));

        let failed = sample().try_map(|v| if v == 2 { Err(v) } else { Ok(v) });
        assert_eq!(failed.err(), Some(2));
    }

    #[test]
    fn test_idempotent_resolution() {
        let table = sample();
        let first = table.route("/voting").matched().map(|v| v as *const i32);
        let second = table.route("/voting").matched().map(|v| v as *const i32);
        assert_eq!(first, second);
    }
}
