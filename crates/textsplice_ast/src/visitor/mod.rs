//! Ancestor-aware traversal.
//!
//! Visitors receive the whole tree plus the path of the visited node, so they
//! can read every ancestor and mutate the parent's child list in one call.
//! After a mutation the visitor tells the walker where to continue with
//! [`Step::ResumeAt`].
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use textsplice_ast::Node;
//! use textsplice_ast::visitor::{Step, visit_parents};
//!
//! let mut tree = Node::element("p", vec![Node::text("a"), Node::element("b", vec![])]);
//! let mut depths = Vec::new();
//!
//! let _ = visit_parents(&mut tree, &mut |_tree: &mut Node, path: &[usize]| {
//!     depths.push(path.len());
//!     ControlFlow::Continue(Step::Continue)
//! });
//!
//! assert_eq!(depths, vec![0, 1, 1]);
//! ```

mod visit_parents;

pub use visit_parents::{ParentsVisitor, Step, VisitResult, visit_parents};
