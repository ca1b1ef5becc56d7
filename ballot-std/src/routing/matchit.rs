//! Matchit-based router implementation.
//!
//! Backed by matchit's radix tree. Only literal paths are accepted: the
//! builder rejects `{param}` and `{*wildcard}` segments so this backend
//! matches exactly what the other backends match.

use ballot_core::{RouteResult, Router, RouterBuildError, RouterBuilder, validate_path};
use matchit::{Match, Router as InnerRouter};
use std::borrow::Cow;

/// A router based on `matchit`.
pub struct MatchitRouter<V> {
    router: InnerRouter<V>,
}

impl<V: Send + Sync + 'static> Router<str, V> for MatchitRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.router.at(key) {
            Ok(Match { value, .. }) => RouteResult::Matched(value),
            Err(_) => RouteResult::NotFound,
        }
    }
}

/// Builder for MatchitRouter.
pub struct MatchitRouterBuilder<V> {
    router: InnerRouter<V>,
}

impl<V> Default for MatchitRouterBuilder<V> {
    fn default() -> Self {
        Self {
            router: InnerRouter::new(),
        }
    }
}

impl<V: Send + Sync + 'static> RouterBuilder<V> for MatchitRouterBuilder<V> {
    type Router = MatchitRouter<V>;

    fn insert(
        &mut self,
        path: impl Into<Cow<'static, str>>,
        value: V,
    ) -> Result<(), RouterBuildError> {
        let path = path.into();
        validate_path(&path)?;
        if path.contains(['{', '}']) {
            return Err(RouterBuildError::InvalidPath(format!(
                "`{}` is not a literal path",
                path
            )));
        }
        self.router
            .insert(path.to_string(), value)
            // matchit errors if route exists or conflicts
            .map_err(|e| RouterBuildError::DuplicateKey(format!("{}: {}", path, e)))
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(MatchitRouter {
            router: self.router,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MatchitRouterBuilder;
    use ballot_core::{RouteResult, Router, RouterBuildError, RouterBuilder};

    #[test]
    fn test_matchit_router() {
        let mut builder = MatchitRouterBuilder::default();
        builder.insert("/", 0).unwrap();
        builder.insert("/signin", 1).unwrap();
        builder.insert("/signup", 2).unwrap();
        let router = builder.build().unwrap();

        assert_eq!(router.route("/"), RouteResult::Matched(&0));
        assert_eq!(router.route("/signin"), RouteResult::Matched(&1));
        assert_eq!(router.route("/signup"), RouteResult::Matched(&2));
        assert_eq!(router.route("/sign"), RouteResult::NotFound);
        assert_eq!(router.route("/signin/"), RouteResult::NotFound);
        assert_eq!(router.route("/SignIn"), RouteResult::NotFound);
    }

    #[test]
    fn test_matchit_rejects_parameters() {
        let mut builder = MatchitRouterBuilder::default();
        assert!(matches!(
            builder.insert("/voting/{round}", 1),
            Err(RouterBuildError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_matchit_duplicate() {
        let mut builder = MatchitRouterBuilder::default();
        builder.insert("/results", 1).unwrap();
        assert!(matches!(
            builder.insert("/results", 2),
            Err(RouterBuildError::DuplicateKey(_))
        ));
    }
}
