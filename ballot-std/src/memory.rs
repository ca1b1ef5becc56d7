//! Headless host document.
//!
//! [`MemoryDocument`] stands in for a browser document: it reports a location
//! and hands out element handles by identifier. Element handles are shared,
//! so whoever created the document can read back what was installed.

use ballot_core::{Document, MountPoint, Node};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

/// An element in a [`MemoryDocument`].
///
/// Clones refer to the same element.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    id: Arc<str>,
    contents: Arc<Mutex<Node>>,
    installs: Arc<AtomicUsize>,
}

impl MemoryElement {
    /// Create an empty element.
    pub fn new(id: &str) -> Self {
        Self {
            id: Arc::from(id),
            contents: Arc::new(Mutex::new(Node::Empty)),
            installs: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A snapshot of the installed tree.
    pub fn contents(&self) -> Node {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The installed tree serialised to HTML.
    pub fn html(&self) -> String {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .to_html()
    }

    /// How many times contents have been replaced.
    pub fn install_count(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }
}

impl MountPoint for MemoryElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_children(&mut self, node: Node) {
        *self
            .contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = node;
        self.installs.fetch_add(1, Ordering::SeqCst);
    }
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    location: String,
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    /// An empty document at `/`.
    pub fn new() -> Self {
        Self {
            location: "/".to_owned(),
            elements: HashMap::new(),
        }
    }

    /// Set the location reported at load time.
    pub fn with_location(mut self, path: impl Into<String>) -> Self {
        self.location = path.into();
        self
    }

    /// Add an empty element with identifier `id`.
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_owned(), MemoryElement::new(id));
        self
    }

    /// A handle to the element with identifier `id`.
    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn location(&self) -> String {
        self.location.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.element(id)
    }
}
