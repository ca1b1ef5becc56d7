//! Host surface traits.
//!
//! The host environment owns the document and the element the application
//! renders into. Both are passed in explicitly so a headless document can
//! stand in for a real one.

use crate::node::Node;

/// An attachment point that holds exactly one rendered tree at a time.
pub trait MountPoint: Send {
    /// The stable identifier this element was looked up by.
    fn id(&self) -> &str;

    /// Replace everything under this element with `node`.
    fn replace_children(&mut self, node: Node);
}

/// The host document.
pub trait Document {
    /// Handle to an element inside the document.
    type Element: MountPoint;

    /// The path the host currently reports (e.g. the address bar).
    fn location(&self) -> String;

    /// Find an element by its identifier.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
