//! Match-and-splice for a single text leaf.

use textsplice_ast::Node;
use tracing::trace;

use crate::scanner::Scanner;
use crate::{Pair, RegExpMatch};

/// Scans `value` with one pair and builds the nodes that replace the leaf.
///
/// `stack` runs from the root down to the leaf holding `value`. Returns
/// `None` when no candidate was accepted, in which case the leaf must be
/// left exactly as it is. Otherwise the returned sequence (possibly empty)
/// takes the leaf's place: literal text around the accepted matches plus
/// whatever the replacer produced for each of them.
pub(crate) fn splice_leaf(value: &str, stack: &[&Node], pair: &mut Pair<'_>) -> Option<Vec<Node>> {
    let mut scanner = Scanner::new(&pair.pattern, value);
    let mut nodes = Vec::new();
    let mut start = 0;
    let mut changed = false;

    while let Some(captures) = scanner.next_match() {
        let Some(whole) = captures.get(0) else {
            break;
        };
        let (position, end) = (whole.start(), whole.end());

        let found = RegExpMatch::new(captures, value, stack);
        let Some(replacement) = pair.replace.call(&found).into_nodes() else {
            trace!(position, "Replacer rejected match");
            scanner.reject(position);
            continue;
        };

        if start != position {
            nodes.push(Node::text(&value[start..position]));
        }
        nodes.extend(replacement);

        start = end;
        changed = true;
        scanner.accept(position, end);
    }

    if !changed {
        return None;
    }

    if start < value.len() {
        nodes.push(Node::text(&value[start..]));
    }

    Some(nodes)
}
