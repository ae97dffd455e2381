//! Traversal driver.
//!
//! Every pair gets one full preorder walk over the current tree. Text
//! introduced by an earlier pair is visible to later pairs, while a pair
//! never scans the nodes it produced itself: after a splice the walk
//! resumes past everything that was inserted.

use std::ops::ControlFlow;

use textsplice_ast::visitor::visit_parents;
use textsplice_ast::{Node, ParentsVisitor, Step, VisitResult};
use tracing::{debug, trace};

use crate::splice::splice_leaf;
use crate::{Ignore, Pair, ReplaceError, Schema};

/// Options for [`find_and_replace`].
#[derive(Debug, Default)]
pub struct Options {
    /// Subtrees to leave alone.
    pub ignore: Ignore,
}

impl Options {
    /// Default options with a custom ignore test.
    pub fn with_ignore(ignore: Ignore) -> Self {
        Self { ignore }
    }
}

/// Finds patterns in text leaves and splices in replacements.
///
/// Mutates `tree` in place and returns it. The rules are validated before
/// the tree is touched, so an error leaves the tree unchanged.
///
/// # Example
///
/// ```rust
/// use textsplice_ast::Node;
/// use textsplice_core::{Options, Replace, find_and_replace};
///
/// let mut tree = Node::element("p", vec![Node::text("Some emphasis.")]);
///
/// find_and_replace(
///     &mut tree,
///     ("emphasis", Replace::with(|found| Node::element("em", vec![Node::text(found.value())]))),
///     &Options::default(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     tree,
///     Node::element("p", vec![
///         Node::text("Some "),
///         Node::element("em", vec![Node::text("emphasis")]),
///         Node::text("."),
///     ])
/// );
/// ```
pub fn find_and_replace<'t, 'a>(
    tree: &'t mut Node,
    schema: impl Into<Schema<'a>>,
    options: &Options,
) -> Result<&'t mut Node, ReplaceError> {
    let mut pairs = schema.into().into_pairs()?;

    for (index, pair) in pairs.iter_mut().enumerate() {
        debug!(pair = index, pattern = pair.pattern.as_str(), "Starting pass");

        let mut pass = Pass {
            pair,
            ignore: &options.ignore,
            splices: 0,
        };
        if visit_parents(tree, &mut pass).is_break() {
            debug!(pair = index, "Pass stopped early");
        }

        debug!(pair = index, splices = pass.splices, "Finished pass");
    }

    Ok(tree)
}

/// One pair's walk over the tree.
struct Pass<'p, 'a> {
    pair: &'p mut Pair<'a>,
    ignore: &'p Ignore,
    splices: usize,
}

impl Pass<'_, '_> {
    fn scan(&mut self, tree: &Node, path: &[usize]) -> Option<Vec<Node>> {
        let stack = tree.stack(path)?;
        if self.ignore.excludes(&stack, path) {
            return None;
        }
        let value = stack.last()?.value()?;
        splice_leaf(value, &stack, self.pair)
    }
}

impl ParentsVisitor for Pass<'_, '_> {
    fn test(&self, node: &Node) -> bool {
        node.is_text()
    }

    fn visit(&mut self, tree: &mut Node, path: &[usize]) -> VisitResult {
        // A text root has no parent to splice into.
        let Some((&index, parent_path)) = path.split_last() else {
            return ControlFlow::Continue(Step::Continue);
        };

        let Some(nodes) = self.scan(tree, path) else {
            return ControlFlow::Continue(Step::Continue);
        };

        let Some(siblings) = tree.get_mut(parent_path).and_then(Node::children_mut) else {
            return ControlFlow::Continue(Step::Continue);
        };
        let count = nodes.len();
        siblings.splice(index..=index, nodes);
        self.splices += 1;
        trace!(?path, inserted = count, "Spliced text leaf");

        ControlFlow::Continue(Step::ResumeAt(index + count))
    }
}
