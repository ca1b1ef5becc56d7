//! HashMap-based router implementation.
//!
//! Requires no external dependencies. Unlike [`RouteTable`] it does not keep
//! declaration order.
//!
//! [`RouteTable`]: super::RouteTable

use ballot_core::{RouteResult, Router, RouterBuildError, RouterBuilder, validate_path};
use std::{borrow::Cow, collections::HashMap};

/// A router backed by `HashMap`.
pub struct HashMapRouter<V> {
    map: HashMap<Cow<'static, str>, V>,
}

impl<V> HashMapRouter<V> {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
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

impl<V> Default for HashMapRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Router<str, V> for HashMapRouter<V>
where
    V: Send + Sync + 'static,
{
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// Builder for `HashMapRouter`.
pub struct HashMapRouterBuilder<V> {
    map: HashMap<Cow<'static, str>, V>,
    allow_duplicates: bool,
}

impl<V> HashMapRouterBuilder<V> {
    /// Accept repeated keys. The earliest binding wins, as in [`RouteTable`].
    ///
    /// [`RouteTable`]: super::RouteTable
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<V> Default for HashMapRouterBuilder<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

impl<V> RouterBuilder<V> for HashMapRouterBuilder<V>
where
    V: Send + Sync + 'static,
{
    type Router = HashMapRouter<V>;

    fn insert(
        &mut self,
        path: impl Into<Cow<'static, str>>,
        value: V,
    ) -> Result<(), RouterBuildError> {
        let path = path.into();
        validate_path(&path)?;
        if !self.allow_duplicates && self.map.contains_key(&path) {
            return Err(RouterBuildError::DuplicateKey(path.into_owned()));
        }
        self.map.entry(path).or_insert(value);
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(HashMapRouter { map: self.map })
    }
}
