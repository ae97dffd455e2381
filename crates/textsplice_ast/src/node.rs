//! Node definitions.
//!
//! The tree model is hast-compatible: a `Root` holds block and inline
//! content, `Element`s carry a tag name and properties, and `Text` leaves
//! carry the string payload that find-and-replace operates on.

use serde::{Deserialize, Serialize};

use crate::{NodeKind, Position};

/// Element properties, keyed by property name in insertion order.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A node in the tree.
///
/// Children are owned by their parent, so every node except the root has
/// exactly one parent at any time.
///
/// # Example
///
/// ```rust
/// use textsplice_ast::Node;
///
/// let paragraph = Node::element("p", vec![
///     Node::text("Some "),
///     Node::element("em", vec![Node::text("emphasis")]),
/// ]);
///
/// assert_eq!(paragraph.tag_name(), Some("p"));
/// assert_eq!(paragraph.text_content(), "Some emphasis");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Document root.
    Root(Root),
    /// Element such as `<p>` or `<em>`.
    Element(Element),
    /// Text leaf.
    Text(Text),
    /// HTML comment.
    Comment(Comment),
    /// Document type declaration.
    Doctype(Doctype),
}

/// Document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Free-form data attached by other tools, kept as is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// An element with a tag name, properties and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,

    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub children: Vec<Node>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A text leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// An HTML comment. Its value is never treated as text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A `<!doctype html>` declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Element {
    /// Creates an element without properties or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
            position: None,
            data: None,
        }
    }

    /// Sets a property, replacing any previous value.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Replaces the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Returns a property value by name.
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }
}

impl Text {
    /// Creates a text leaf without position information.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            position: None,
            data: None,
        }
    }
}

impl Node {
    /// Creates a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root {
            children,
            ..Root::default()
        })
    }

    /// Creates an element node.
    pub fn element(tag_name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::new(tag_name).with_children(children))
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text::new(value))
    }

    /// Creates a comment node.
    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment(Comment {
            value: value.into(),
            ..Comment::default()
        })
    }

    /// Returns the kind of this node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::Doctype(_) => NodeKind::Doctype,
        }
    }

    /// Returns true if this node is a text leaf.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns true if this node can hold children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        self.kind().is_parent()
    }

    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the tag name for elements.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|element| element.tag_name.as_str())
    }

    /// Returns the string payload of text and comment nodes.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            Node::Comment(comment) => Some(&comment.value),
            _ => None,
        }
    }

    /// Returns the children of parent nodes.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    /// Returns the mutable child list of parent nodes.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(root) => Some(&mut root.children),
            Node::Element(element) => Some(&mut element.children),
            _ => None,
        }
    }

    /// Returns the source position, if recorded.
    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Root(root) => root.position.as_ref(),
            Node::Element(element) => element.position.as_ref(),
            Node::Text(text) => text.position.as_ref(),
            Node::Comment(comment) => comment.position.as_ref(),
            Node::Doctype(doctype) => doctype.position.as_ref(),
        }
    }

    /// Returns the node at `path`, a list of child indexes from this node.
    ///
    /// An empty path addresses this node.
    pub fn get(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in path {
            node = node.children()?.get(index)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`Node::get`].
    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &index in path {
            node = node.children_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// Returns every node from this one down to the node at `path`,
    /// both ends included.
    pub fn stack(&self, path: &[usize]) -> Option<Vec<&Node>> {
        let mut stack = Vec::with_capacity(path.len() + 1);
        let mut node = self;
        stack.push(node);
        for &index in path {
            node = node.children()?.get(index)?;
            stack.push(node);
        }
        Some(stack)
    }

    /// Concatenates the values of all descendant text leaves.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.value),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}
