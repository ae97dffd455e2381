//! Subtree exclusion.

use textsplice_ast::{ElementTest, Node};

/// Elements whose text is never searched unless the caller says otherwise.
pub const DEFAULT_IGNORE: [&str; 5] = ["title", "script", "style", "svg", "math"];

/// Decides which subtrees find-and-replace must leave alone.
///
/// The test is evaluated against every ancestor of a candidate text leaf,
/// from the root down; one hit excludes the leaf.
#[derive(Debug)]
pub struct Ignore {
    test: ElementTest,
}

impl Ignore {
    /// Ignores elements passing `test`.
    pub fn new(test: impl Into<ElementTest>) -> Self {
        Self { test: test.into() }
    }

    /// Ignores nothing.
    pub fn nothing() -> Self {
        Self {
            test: ElementTest::Tags(Vec::new()),
        }
    }

    /// Ignores [`DEFAULT_IGNORE`] plus `extra` tag names.
    pub fn default_with<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tag_names = DEFAULT_IGNORE
            .iter()
            .map(|tag_name| tag_name.to_string())
            .chain(extra.into_iter().map(Into::into))
            .collect::<Vec<_>>();
        Self {
            test: ElementTest::Tags(tag_names),
        }
    }

    /// Returns true if `node`, at `index` in `parent`, excludes its subtree.
    pub fn is_ignored(&self, node: &Node, index: Option<usize>, parent: Option<&Node>) -> bool {
        self.test.check(node, index, parent)
    }

    /// Checks the ancestors in `stack` (root first, leaf last) top-down.
    ///
    /// `path` is the leaf's path from the root, so `path[depth - 1]` is the
    /// index of `stack[depth]` in `stack[depth - 1]`.
    pub(crate) fn excludes(&self, stack: &[&Node], path: &[usize]) -> bool {
        let ancestors = stack.len().saturating_sub(1);
        (0..ancestors).any(|depth| {
            let (index, parent) = match depth.checked_sub(1) {
                Some(above) => (path.get(above).copied(), stack.get(above).copied()),
                None => (None, None),
            };
            self.is_ignored(stack[depth], index, parent)
        })
    }
}

impl Default for Ignore {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE)
    }
}
