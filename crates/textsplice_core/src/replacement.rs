//! Replacer inputs and outputs.

use regex::Captures;
use textsplice_ast::{Element, Node};

/// What a replacer wants done with one match.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Replacement {
    /// Remove the matched text.
    #[default]
    Delete,
    /// Replace the matched text with a text node.
    Text(String),
    /// Replace the matched text with these nodes, in order.
    Nodes(Vec<Node>),
    /// Treat the candidate as if it had not matched.
    Reject,
}

impl Replacement {
    /// Creates a text replacement; an empty string deletes.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Replacement::Delete
        } else {
            Replacement::Text(value)
        }
    }

    /// Creates a replacement with a single node.
    pub fn node(node: impl Into<Node>) -> Self {
        Replacement::Nodes(vec![node.into()])
    }

    /// Converts the replacement into the nodes that take the match's place,
    /// or `None` when the match is rejected.
    pub(crate) fn into_nodes(self) -> Option<Vec<Node>> {
        match self {
            Replacement::Reject => None,
            Replacement::Delete => Some(Vec::new()),
            Replacement::Text(value) if value.is_empty() => Some(Vec::new()),
            Replacement::Text(value) => Some(vec![Node::text(value)]),
            Replacement::Nodes(nodes) => Some(nodes),
        }
    }
}

impl From<&str> for Replacement {
    fn from(value: &str) -> Self {
        Replacement::text(value)
    }
}

impl From<String> for Replacement {
    fn from(value: String) -> Self {
        Replacement::text(value)
    }
}

impl From<Node> for Replacement {
    fn from(node: Node) -> Self {
        Replacement::Nodes(vec![node])
    }
}

impl From<Element> for Replacement {
    fn from(element: Element) -> Self {
        Replacement::node(element)
    }
}

impl From<Vec<Node>> for Replacement {
    fn from(nodes: Vec<Node>) -> Self {
        Replacement::Nodes(nodes)
    }
}

impl From<()> for Replacement {
    fn from(_: ()) -> Self {
        Replacement::Delete
    }
}

impl<T: Into<Replacement>> From<Option<T>> for Replacement {
    fn from(value: Option<T>) -> Self {
        value.map_or(Replacement::Delete, Into::into)
    }
}

/// One match handed to a replacer.
///
/// `index` is the byte offset of the match in `input`, the full value of the
/// text leaf being scanned. `stack` runs from the tree root down to that
/// leaf, both included.
#[derive(Debug)]
pub struct RegExpMatch<'a> {
    /// Byte offset of the match start in `input`.
    pub index: usize,
    /// The complete value of the text leaf.
    pub input: &'a str,
    /// Ancestors of the leaf from the root, followed by the leaf itself.
    pub stack: &'a [&'a Node],
    captures: Captures<'a>,
}

impl<'a> RegExpMatch<'a> {
    pub(crate) fn new(captures: Captures<'a>, input: &'a str, stack: &'a [&'a Node]) -> Self {
        let index = captures.get(0).map_or(0, |whole| whole.start());
        Self {
            index,
            input,
            stack,
            captures,
        }
    }

    /// The whole matched text.
    pub fn value(&self) -> &'a str {
        self.captures.get(0).map_or("", |whole| whole.as_str())
    }

    /// Capture group `index`; group 0 is the whole match.
    ///
    /// Groups that did not participate in the match are `None`.
    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.captures.get(index).map(|group| group.as_str())
    }

    /// Capture group by name.
    pub fn name(&self, name: &str) -> Option<&'a str> {
        self.captures.name(name).map(|group| group.as_str())
    }

    /// All capture groups after the whole match, in order.
    pub fn groups(&self) -> Vec<Option<&'a str>> {
        self.captures
            .iter()
            .skip(1)
            .map(|group| group.map(|group| group.as_str()))
            .collect()
    }

    /// The text leaf being scanned.
    pub fn leaf(&self) -> Option<&'a Node> {
        self.stack.last().copied()
    }

    /// The leaf's parent.
    pub fn parent(&self) -> Option<&'a Node> {
        self.stack.len().checked_sub(2).map(|index| self.stack[index])
    }
}
