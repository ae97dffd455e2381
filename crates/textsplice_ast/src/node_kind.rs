//! Node kind discriminator.

use serde::{Deserialize, Serialize};

/// The kind of a [`Node`](crate::Node), matching the hast `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Document root.
    Root,
    /// Element with a tag name.
    Element,
    /// Text leaf.
    Text,
    /// HTML comment.
    Comment,
    /// Document type declaration.
    Doctype,
}

impl NodeKind {
    /// Returns true if nodes of this kind can hold children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(self, NodeKind::Root | NodeKind::Element)
    }

    /// Returns the hast `type` string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
            NodeKind::Doctype => "doctype",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
