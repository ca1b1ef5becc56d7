//! Rendered output.
//!
//! A [`Node`] is what a renderable produces and what a mount point holds.
//! It is a plain value: rendering twice and comparing the results is how
//! strict mode detects impure components.

use std::{borrow::Cow, fmt};

/// A rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
    /// Nothing. Serialises to the empty string.
    #[default]
    Empty,
    /// A text run. Escaped on serialisation.
    Text(String),
    /// A tagged element with attributes and children.
    Element(Element),
    /// A sequence of sibling nodes without a wrapper.
    Fragment(Vec<Node>),
}

/// A tagged element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    attrs: Vec<(Cow<'static, str>, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Attributes serialise in insertion order.
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    /// Start building an element node.
    pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
        Element::new(tag)
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns true if the node produces no output at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Empty => true,
            Node::Text(_) | Node::Element(_) => false,
            Node::Fragment(nodes) => nodes.iter().all(Node::is_empty),
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Serialise to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(text) => escape_into(text, out),
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
