//! Application shell.

use ballot_core::{Node, Render};

/// Stateless container around the router view.
///
/// Renders `<div class="app">` with the child's output inside. When the child
/// renders nothing, the container is still emitted, empty.
#[derive(Debug, Clone)]
pub struct AppShell<T> {
    child: T,
}

impl<T: Render> AppShell<T> {
    /// Wrap `child`.
    pub fn new(child: T) -> Self {
        Self { child }
    }

    /// The wrapped child.
    pub fn child(&self) -> &T {
        &self.child
    }
}

impl<T: Render> Render for AppShell<T> {
    fn render(&self) -> Node {
        Node::element("div")
            .attr("class", "app")
            .child(self.child.render())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_wraps_child() {
        let shell = AppShell::new(|| Node::text("page"));
        assert_eq!(shell.render().to_html(), r#"<div class="app">page</div>"#);
    }

    #[test]
    fn test_shell_with_empty_child() {
        let shell = AppShell::new(|| Node::Empty);
        assert_eq!(shell.render().to_html(), r#"<div class="app"></div>"#);
    }
}
