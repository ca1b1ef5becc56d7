use ballot::{
    MemoryDocument, MountError, Node, Page, PageRegistry, ShellConfig, ShellError, StrictChecks,
};

mod common;
use common::{CountingRegistry, EMPTY_SHELL, document_at, shell_html, start_at};

#[test]
fn test_start_renders_home_at_root() {
    let (document, app) = start_at("/");

    let root = document.element("root").unwrap();
    assert_eq!(root.html(), shell_html(Page::Home));
    assert_eq!(root.install_count(), 1);
    assert_eq!(app.location().path(), "/");
}

#[test]
fn test_start_follows_host_location() {
    for page in Page::ALL {
        let path = ballot::routing::path_of(page).unwrap();
        let (document, _app) = start_at(path);
        assert_eq!(document.element("root").unwrap().html(), shell_html(page));
    }
}

#[test]
fn test_missing_mount_point_is_fatal() {
    let document = MemoryDocument::new().with_element("app");
    let result = ballot::start(&document, &ShellConfig::default());

    match result {
        Err(ShellError::Mount(MountError::MissingMountPoint { id })) => assert_eq!(id, "root"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("mounting without #root must fail"),
    }
    assert_eq!(document.element("app").unwrap().install_count(), 0);
}

#[test]
fn test_custom_mount_id() {
    let document = MemoryDocument::new().with_element("app");
    let config = ShellConfig::new().with_mount_id("app");
    ballot::start(&document, &config).unwrap();

    assert_eq!(document.element("app").unwrap().html(), shell_html(Page::Home));
}

#[test]
fn test_unmatched_path_renders_empty_shell() {
    let (document, app) = start_at("/nonexistent");

    assert_eq!(document.element("root").unwrap().html(), EMPTY_SHELL);
    assert_eq!(app.location().path(), "/nonexistent");
}

#[test]
fn test_navigation_replaces_contents() {
    let (document, mut app) = start_at("/");
    let root = document.element("root").unwrap();

    app.navigate("/signin");
    assert_eq!(root.html(), shell_html(Page::SignIn));

    app.navigate("/voting");
    assert_eq!(root.html(), shell_html(Page::Voting));

    app.navigate("/Voting");
    assert_eq!(root.html(), EMPTY_SHELL);

    app.navigate("/results");
    assert_eq!(root.html(), shell_html(Page::Results));
    assert_eq!(root.install_count(), 5);
}

#[test]
fn test_back_restores_previous_page() {
    let (document, mut app) = start_at("/");
    let root = document.element("root").unwrap();

    app.navigate("/signup");
    app.navigate("/resetpassword");
    assert_eq!(root.html(), shell_html(Page::ResetPassword));

    assert!(app.back());
    assert_eq!(root.html(), shell_html(Page::SignUp));
    assert!(app.back());
    assert_eq!(root.html(), shell_html(Page::Home));

    let installs = root.install_count();
    assert!(!app.back());
    assert_eq!(root.install_count(), installs);
}

#[test]
fn test_only_selected_page_renders() {
    let counting = CountingRegistry::new();
    let document = document_at("/voting");
    let config = ShellConfig::new().with_strict(StrictChecks::empty());

    let mut app = ballot::start_with(&document, &config, counting.registry.clone()).unwrap();
    assert_eq!(counting.count(Page::Voting), 1);
    assert_eq!(
        counting.counts().iter().map(|(_, n)| n).sum::<usize>(),
        1,
        "only the matched page renders"
    );

    app.navigate("/results");
    assert_eq!(counting.count(Page::Results), 1);
    assert_eq!(counting.count(Page::Voting), 1);

    app.navigate("/nonexistent");
    assert_eq!(counting.counts().iter().map(|(_, n)| n).sum::<usize>(), 2);
}

#[test]
fn test_refresh_rerenders_current_location() {
    let counting = CountingRegistry::new();
    let config = ShellConfig::new().with_strict(StrictChecks::empty());
    let mut app = ballot::start_with(&document_at("/"), &config, counting.registry.clone()).unwrap();

    app.refresh();
    assert_eq!(counting.count(Page::Home), 2);
}

#[test]
fn test_substituted_page() {
    let mut registry = PageRegistry::standard();
    registry.register(Page::Results, || Node::text("tally"));
    let document = document_at("/results");

    ballot::start_with(&document, &ShellConfig::default(), registry).unwrap();
    assert_eq!(
        document.element("root").unwrap().html(),
        r#"<div class="app">tally</div>"#
    );
}

#[test]
fn test_incomplete_registry_is_rejected() {
    let registry = PageRegistry::new().with(Page::Home, ballot::pages::HomePage);
    let document = document_at("/");

    let err = ballot::start_with(&document, &ShellConfig::default(), registry)
        .err()
        .unwrap();
    assert!(matches!(err, ShellError::Routing(_)));
    assert_eq!(document.element("root").unwrap().install_count(), 0);
}
