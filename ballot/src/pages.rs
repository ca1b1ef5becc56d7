//! Pages and the page registry.
//!
//! The pages here are placeholders: each renders a titled landmark and
//! nothing else. The real page bodies are supplied by their own crates and
//! registered over these through [`PageRegistry::register`].

use ballot_core::{Node, PageHandle, Render, handle};
use std::{collections::HashMap, fmt};

/// The page monikers the application routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    /// Landing page.
    Home,
    /// Sign-in form.
    SignIn,
    /// Account creation form.
    SignUp,
    /// Password reset form.
    ResetPassword,
    /// Ballot page.
    Voting,
    /// Results page.
    Results,
}

impl Page {
    /// Every page, in route table order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::SignIn,
        Page::SignUp,
        Page::ResetPassword,
        Page::Voting,
        Page::Results,
    ];

    /// The moniker, e.g. `"ResetPassword"`.
    pub const fn moniker(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::SignIn => "SignIn",
            Page::SignUp => "SignUp",
            Page::ResetPassword => "ResetPassword",
            Page::Voting => "Voting",
            Page::Results => "Results",
        }
    }

    /// Human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::SignIn => "Sign in",
            Page::SignUp => "Sign up",
            Page::ResetPassword => "Reset password",
            Page::Voting => "Voting",
            Page::Results => "Results",
        }
    }

    /// Lower-case identifier used in CSS classes.
    pub const fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::SignIn => "signin",
            Page::SignUp => "signup",
            Page::ResetPassword => "resetpassword",
            Page::Voting => "voting",
            Page::Results => "results",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.moniker())
    }
}

/// The landmark every placeholder page renders.
fn placeholder(page: Page) -> Node {
    Node::element("main")
        .attr("class", format!("page page-{}", page.slug()))
        .attr("data-page", page.moniker())
        .child(Node::element("h1").child(page.title()))
        .into()
}

macro_rules! placeholder_page {
    ($($(#[$meta:meta])* $name:ident => $page:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Render for $name {
                fn render(&self) -> Node {
                    placeholder($page)
                }
            }
        )+
    };
}

placeholder_page! {
    /// The landing page.
    HomePage => Page::Home;
    /// The sign-in page.
    SignInPage => Page::SignIn;
    /// The sign-up page.
    SignUpPage => Page::SignUp;
    /// The password reset page.
    ResetPasswordPage => Page::ResetPassword;
    /// The voting page.
    VotingPage => Page::Voting;
    /// The results page.
    ResultsPage => Page::Results;
}

/// Maps page monikers to their handlers.
#[derive(Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<Page, PageHandle>,
}

impl PageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in placeholder for every page.
    pub fn standard() -> Self {
        Self::new()
            .with(Page::Home, HomePage)
            .with(Page::SignIn, SignInPage)
            .with(Page::SignUp, SignUpPage)
            .with(Page::ResetPassword, ResetPasswordPage)
            .with(Page::Voting, VotingPage)
            .with(Page::Results, ResultsPage)
    }

    /// Register `renderable` for `page`, replacing any previous handler.
    pub fn register<R: Render>(&mut self, page: Page, renderable: R) -> Option<PageHandle> {
        self.register_handle(page, handle(renderable))
    }

    /// Register a handler that is already shared, e.g. one page bound for
    /// several monikers.
    pub fn register_handle(&mut self, page: Page, handler: PageHandle) -> Option<PageHandle> {
        self.pages.insert(page, handler)
    }

    /// Builder form of [`PageRegistry::register`].
    pub fn with<R: Render>(mut self, page: Page, renderable: R) -> Self {
        self.register(page, renderable);
        self
    }

    /// The handler for `page`.
    pub fn get(&self, page: Page) -> Option<&PageHandle> {
        self.pages.get(&page)
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pages: Vec<_> = self.pages.keys().collect();
        pages.sort();
        f.debug_struct("PageRegistry").field("pages", &pages).finish()
    }
}
