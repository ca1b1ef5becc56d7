//! Every router backend resolves the application table identically.

use ballot::{
    APP_ROUTES, HashMapRouterBuilder, History, Node, Page, PageHandle, PageRegistry, Render,
    RouteTable, Router, RouterBuilder, Routes,
};

fn fill<B: RouterBuilder<PageHandle>>(registry: &PageRegistry) -> B::Router {
    let mut builder = B::default();
    for (path, page) in APP_ROUTES {
        builder
            .insert(path, registry.get(page).unwrap().clone())
            .unwrap();
    }
    builder.build().unwrap()
}

fn assert_app_semantics<R: Router<str, PageHandle>>(router: &R, registry: &PageRegistry) {
    for (path, page) in APP_ROUTES {
        let handler = router.route(path).matched().unwrap();
        assert_eq!(handler.render(), registry.get(page).unwrap().render());
    }
    for path in ["/Voting", "/voting/", "/nonexistent", ""] {
        assert!(!router.contains(path), "{:?} must not match", path);
    }
}

#[test]
fn test_table_backend() {
    let registry = PageRegistry::standard();
    let router = fill::<ballot::RouteTableBuilder<PageHandle>>(&registry);
    assert_app_semantics(&router, &registry);
}

#[test]
fn test_hashmap_backend() {
    let registry = PageRegistry::standard();
    let router = fill::<HashMapRouterBuilder<PageHandle>>(&registry);
    assert_app_semantics(&router, &registry);
}

#[test]
fn test_router_view_over_hashmap() {
    let registry = PageRegistry::standard();
    let router = fill::<HashMapRouterBuilder<PageHandle>>(&registry);
    let history = History::new("/results");
    let routes = Routes::new(router, history.clone());

    assert_eq!(routes.render(), registry.get(Page::Results).unwrap().render());
    history.push("/missing");
    assert_eq!(routes.render(), Node::Empty);
}

#[test]
fn test_backends_agree_on_repeated_paths() {
    let mut table = RouteTable::builder().allow_duplicates();
    let mut hashmap = HashMapRouterBuilder::default().allow_duplicates();
    for (path, value) in [("/voting", 1), ("/results", 2), ("/voting", 3)] {
        table.insert(path, value).unwrap();
        hashmap.insert(path, value).unwrap();
    }
    let table = table.build().unwrap();
    let hashmap = hashmap.build().unwrap();

    for path in ["/voting", "/results", "/missing"] {
        assert_eq!(
            table.route(path).matched(),
            hashmap.route(path).matched(),
            "{} resolved differently",
            path
        );
    }
    assert_eq!(table.route("/voting").matched(), Some(&1));
}

#[cfg(feature = "matchit")]
#[test]
fn test_matchit_backend() {
    let registry = PageRegistry::standard();
    let router = fill::<ballot::MatchitRouterBuilder<PageHandle>>(&registry);
    assert_app_semantics(&router, &registry);
}
