//! # textsplice_ast
//!
//! Tree definitions for textsplice.
//!
//! This crate provides the hast-compatible node model that find-and-replace
//! runs on, together with the two primitives the engine builds upon:
//!
//! - [`visit_parents`](visitor::visit_parents): a preorder walk that hands
//!   visitors the full path of the visited node and accepts an explicit
//!   resume index after the visitor spliced its parent's children
//! - [`ElementTest`]: a tag-name or predicate test evaluated as
//!   `(node, index, parent)`
//!
//! ## Architecture
//!
//! - Nodes own their children (`Vec<Node>`), so a subtree has one parent
//! - Nodes are addressed by paths of child indexes from the root
//! - The serde shape is the hast JSON shape (`type`, `tagName`, `children`)
//!
//! ## Example
//!
//! ```rust
//! use textsplice_ast::{Node, NodeKind};
//!
//! let tree = Node::root(vec![Node::element("p", vec![Node::text("hello")])]);
//!
//! let leaf = tree.get(&[0, 0]).unwrap();
//! assert_eq!(leaf.kind(), NodeKind::Text);
//! assert_eq!(leaf.value(), Some("hello"));
//! ```

mod node;
mod node_kind;
mod span;
pub mod visitor;

pub use element_test::{ElementPredicate, ElementTest, TagTest};
pub use node::{Comment, Doctype, Element, Node, Properties, Root, Text};
pub use node_kind::NodeKind;
pub use span::{Point, Position};

// Re-export commonly used visitor items for convenience
pub use visitor::{ParentsVisitor, Step, VisitResult};
