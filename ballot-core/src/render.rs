//! # Renderables
//!
//! Every page, wrapper and router view is a [`Render`]: a unit that produces
//! a [`Node`] with no input parameters. The router never inspects a handler
//! beyond calling [`Render::render`].
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|| Node::text("hello")`
//! 2. **Struct implementation**: `impl Render for MyPage`
//! 3. **Shared handle**: [`PageHandle`] for storing heterogeneous handlers in one table

use crate::node::Node;
use std::sync::Arc;

/// A no-argument renderable unit.
///
/// Implementations should be pure: rendering twice in a row must yield equal
/// output. Strict mode checks this.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered",
    label = "missing `Render` implementation",
    note = "Implement `Render` or pass a closure `Fn() -> Node`."
)]
pub trait Render: Send + Sync + 'static {
    /// Produce the output tree.
    fn render(&self) -> Node;
}

// Blanket impl for closures
impl<F> Render for F
where
    F: Fn() -> Node + Send + Sync + 'static,
{
    fn render(&self) -> Node {
        (self)()
    }
}

/// A shared, type-erased renderable, as stored in route tables.
pub type PageHandle = Arc<dyn Render>;

/// Erase a renderable into a [`PageHandle`].
pub fn handle<R: Render>(renderable: R) -> PageHandle {
    Arc::new(renderable)
}
