use std::cmp::Ordering;

use crate::node::Node;

/// Canonical order for the children of a `Multiplication`.
pub(crate) fn ascending(a: &Node, b: &Node) -> Ordering {
    a.value()
        .cmp(&b.value())
        .then_with(|| rank(a).cmp(&rank(b)))
}

/// Canonical order for the children of an `Addition`.
///
/// Values compare in reverse; the variant rank tiebreak stays ascending in
/// both directions.
pub(crate) fn descending(a: &Node, b: &Node) -> Ordering {
    b.value()
        .cmp(&a.value())
        .then_with(|| rank(a).cmp(&rank(b)))
}

fn rank(node: &Node) -> u8 {
    match node {
        Node::Value(_) => 0,
        Node::Addition(_) => 1,
        Node::Multiplication(_) => 2,
        Node::Division(_, _) => 3,
        Node::Negation(_) => 4,
    }
}
