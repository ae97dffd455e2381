//! Preorder walk with resumable child iteration.

use std::ops::ControlFlow;

use crate::Node;

/// What the walker does after a node was visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Descend into the node's children, then move to the next sibling.
    Continue,
    /// Do not descend; move to the next sibling.
    SkipChildren,
    /// Do not descend; continue with the parent's child at this index.
    ///
    /// The index is read against the parent's child list as it is after
    /// the visit, so a visitor that replaced itself with `n` nodes at
    /// `index` returns `ResumeAt(index + n)` to step over all of them.
    ResumeAt(usize),
}

/// Result type for visitor calls.
///
/// - `ControlFlow::Continue(step)` - keep walking as `step` says
/// - `ControlFlow::Break(())` - stop the walk
pub type VisitResult = ControlFlow<(), Step>;

/// Visitor for [`visit_parents`].
pub trait ParentsVisitor {
    /// Returns true for nodes this visitor wants to see.
    ///
    /// Nodes that fail the test are still walked into.
    fn test(&self, _node: &Node) -> bool {
        true
    }

    /// Visits the node at `path` inside `tree`; `tree.get(path)` is the
    /// visited node.
    fn visit(&mut self, tree: &mut Node, path: &[usize]) -> VisitResult;
}

impl<F> ParentsVisitor for F
where
    F: FnMut(&mut Node, &[usize]) -> VisitResult,
{
    fn visit(&mut self, tree: &mut Node, path: &[usize]) -> VisitResult {
        self(tree, path)
    }
}

/// Walks `tree` in preorder, calling `visitor` for every node it accepts.
///
/// Child lists are re-read after every visit, so visitors may splice the
/// parent's children as long as they report where to resume.
///
/// # Returns
///
/// `ControlFlow::Continue(())` if the walk completed,
/// or `ControlFlow::Break(())` if the visitor stopped it.
pub fn visit_parents<V>(tree: &mut Node, visitor: &mut V) -> ControlFlow<()>
where
    V: ParentsVisitor + ?Sized,
{
    let mut path = Vec::new();
    visit_at(tree, &mut path, visitor)?;
    ControlFlow::Continue(())
}

fn visit_at<V>(tree: &mut Node, path: &mut Vec<usize>, visitor: &mut V) -> ControlFlow<(), Option<usize>>
where
    V: ParentsVisitor + ?Sized,
{
    if tree.get(path).is_some_and(|node| visitor.test(node)) {
        match visitor.visit(tree, path)? {
            Step::Continue => {}
            Step::SkipChildren => return ControlFlow::Continue(None),
            Step::ResumeAt(index) => return ControlFlow::Continue(Some(index)),
        }
    }

    let mut index = 0;
    while index < child_count(tree, path) {
        path.push(index);
        let resume = visit_at(tree, path, visitor);
        path.pop();
        index = resume?.unwrap_or(index + 1);
    }

    ControlFlow::Continue(None)
}

fn child_count(tree: &Node, path: &[usize]) -> usize {
    tree.get(path)
        .and_then(Node::children)
        .map_or(0, <[Node]>::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        Node::root(vec![
            Node::element(
                "p",
                vec![
                    Node::text("a"),
                    Node::element("em", vec![Node::text("b")]),
                    Node::text("c"),
                ],
            ),
            Node::text("d"),
        ])
    }

    /// Records the path of every text leaf.
    struct TextPaths {
        paths: Vec<Vec<usize>>,
    }

    impl ParentsVisitor for TextPaths {
        fn test(&self, node: &Node) -> bool {
            node.is_text()
        }

        fn visit(&mut self, _tree: &mut Node, path: &[usize]) -> VisitResult {
            self.paths.push(path.to_vec());
            ControlFlow::Continue(Step::Continue)
        }
    }

    #[test]
    fn visits_in_preorder() {
        let mut tree = sample();
        let mut kinds = Vec::new();

        let result = visit_parents(&mut tree, &mut |tree: &mut Node, path: &[usize]| {
            kinds.push(tree.get(path).map(Node::kind));
            ControlFlow::Continue(Step::Continue)
        });

        assert_eq!(result, ControlFlow::Continue(()));
        assert_eq!(
            kinds,
            vec![
                Some(NodeKind::Root),
                Some(NodeKind::Element),
                Some(NodeKind::Text),
                Some(NodeKind::Element),
                Some(NodeKind::Text),
                Some(NodeKind::Text),
                Some(NodeKind::Text),
            ]
        );
    }

    #[test]
    fn test_filters_visited_nodes() {
        let mut tree = sample();
        let mut visitor = TextPaths { paths: Vec::new() };

        let _ = visit_parents(&mut tree, &mut visitor);

        assert_eq!(
            visitor.paths,
            vec![vec![0, 0], vec![0, 1, 0], vec![0, 2], vec![1]]
        );
    }

    #[test]
    fn skip_children_does_not_descend() {
        let mut tree = sample();
        let mut texts = Vec::new();

        let _ = visit_parents(&mut tree, &mut |tree: &mut Node, path: &[usize]| {
            let node = tree.get(path).unwrap();
            if let Some(value) = node.value() {
                texts.push(value.to_string());
            }
            if node.tag_name() == Some("em") {
                ControlFlow::Continue(Step::SkipChildren)
            } else {
                ControlFlow::Continue(Step::Continue)
            }
        });

        assert_eq!(texts, vec!["a", "c", "d"]);
    }

    #[test]
    fn break_stops_the_walk() {
        let mut tree = sample();
        let mut count = 0;

        let result = visit_parents(&mut tree, &mut |tree: &mut Node, path: &[usize]| {
            count += 1;
            if tree.get(path).is_some_and(Node::is_text) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(Step::Continue)
            }
        });

        assert_eq!(result, ControlFlow::Break(()));
        assert_eq!(count, 3);
    }

    #[test]
    fn resume_after_splice_skips_inserted_nodes() {
        let mut tree = Node::element("p", vec![Node::text("ab"), Node::text("c")]);
        let mut seen = Vec::new();

        let _ = visit_parents(&mut tree, &mut |tree: &mut Node, path: &[usize]| {
            let Some((&index, parent_path)) = path.split_last() else {
                return ControlFlow::Continue(Step::Continue);
            };
            let value = tree.get(path).and_then(Node::value).unwrap().to_string();
            seen.push(value.clone());
            if value == "ab" {
                let parent = tree.get_mut(parent_path).and_then(Node::children_mut).unwrap();
                parent.splice(index..=index, [Node::text("a"), Node::text("b")]);
                return ControlFlow::Continue(Step::ResumeAt(index + 2));
            }
            ControlFlow::Continue(Step::Continue)
        });

        assert_eq!(seen, vec!["ab", "c"]);
        assert_eq!(tree.text_content(), "abc");
        assert_eq!(tree.children().map(<[Node]>::len), Some(3));
    }

    #[test]
    fn resume_at_same_index_revisits_replacement() {
        let mut tree = Node::element("p", vec![Node::text("x"), Node::text("y")]);
        let mut seen = Vec::new();

        let _ = visit_parents(&mut tree, &mut |tree: &mut Node, path: &[usize]| {
            let Some((&index, parent_path)) = path.split_last() else {
                return ControlFlow::Continue(Step::Continue);
            };
            let node = tree.get(path).unwrap();
            seen.push(node.kind());
            if node.value() == Some("x") {
                let parent = tree.get_mut(parent_path).and_then(Node::children_mut).unwrap();
                parent[index] = Node::element("b", vec![Node::text("z")]);
                return ControlFlow::Continue(Step::ResumeAt(index));
            }
            ControlFlow::Continue(Step::Continue)
        });

        assert_eq!(
            seen,
            vec![
                NodeKind::Text,
                NodeKind::Element,
                NodeKind::Text,
                NodeKind::Text
            ]
        );
    }

    #[test]
    fn removal_shrinks_iteration() {
        let mut tree = Node::element("p", vec![Node::text("x"), Node::text("x"), Node::text("y")]);
        let mut seen = 0;

        let _ = visit_parents(&mut tree, &mut |tree: &mut Node, path: &[usize]| {
            let Some((&index, parent_path)) = path.split_last() else {
                return ControlFlow::Continue(Step::Continue);
            };
            seen += 1;
            if tree.get(path).and_then(Node::value) == Some("x") {
                let parent = tree.get_mut(parent_path).and_then(Node::children_mut).unwrap();
                parent.remove(index);
                return ControlFlow::Continue(Step::ResumeAt(index));
            }
            ControlFlow::Continue(Step::Continue)
        });

        assert_eq!(seen, 3);
        assert_eq!(tree.text_content(), "y");
    }
}
