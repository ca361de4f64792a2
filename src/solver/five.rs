use log::debug;

use crate::node::Node;
use crate::operate::{self, Operator};
use crate::solver::permutations;

/// Lazy enumerator over every five-card candidate: the distinct card-value
/// rows for this hand times three tree shapes times 4^4 operator
/// assignments.
///
/// Rows come pre-deduplicated from the permutation table, so a hand with
/// repeated cards (a pair, two pairs, a triple, a pair and a triple) skips
/// the value-identical slot orders entirely instead of re-evaluating them.
pub struct FiveCardSolver {
    target: i32,
    rows: Vec<[i32; 5]>,
    mutations: u32,
    cursor: u32,
}

impl FiveCardSolver {
    const SHAPES: u32 = 3;

    pub(crate) fn new(target: i32, cards: [i32; 5]) -> Self {
        let rows = permutations::distinct_rows(&cards);
        let mutations = 256 * Self::SHAPES * rows.len() as u32;
        debug!(
            "five-card search over {} rows, {} mutations",
            rows.len(),
            mutations
        );
        Self {
            target,
            rows,
            mutations,
            cursor: 0,
        }
    }

    fn attempt(&self, m: u32) -> Option<Node> {
        let rows = self.rows.len() as u32;
        let (mutation, index) = (m / rows, (m % rows) as usize);
        let [c0, c1, c2, c3, c4] = self.rows[index];

        let (ops, shape) = (mutation / Self::SHAPES, mutation % Self::SHAPES);
        match shape {
            0 => self.split_tail(ops, c0, c1, c2, c3, c4),
            1 => self.balanced_head(ops, c0, c1, c2, c3, c4),
            _ => self.left_chain(ops, c0, c1, c2, c3, c4),
        }
    }

    /// Shape 0: `((c0 o0 c1) o1 c2) o3 (c3 o2 c4)`.
    fn split_tail(&self, ops: u32, c0: i32, c1: i32, c2: i32, c3: i32, c4: i32) -> Option<Node> {
        let v0 = operate::apply(Operator::from_bits(ops), c0, c1)?;
        let v1 = operate::apply(Operator::from_bits(ops >> 2), v0, c2)?;
        let v2 = operate::apply(Operator::from_bits(ops >> 4), c3, c4)?;
        let v3 = operate::apply(Operator::from_bits(ops >> 6), v1, v2)?;
        if v3 != self.target {
            return None;
        }

        let n0 = Node::operation(ops, Node::Value(c0), Node::Value(c1));
        let n1 = Node::operation(ops >> 2, n0, Node::Value(c2));
        let n2 = Node::operation(ops >> 4, Node::Value(c3), Node::Value(c4));
        Some(Node::operation(ops >> 6, n1, n2))
    }

    /// Shape 1: `((c0 o0 c1) o2 (c2 o1 c3)) o3 c4`.
    fn balanced_head(&self, ops: u32, c0: i32, c1: i32, c2: i32, c3: i32, c4: i32) -> Option<Node> {
        let v0 = operate::apply(Operator::from_bits(ops), c0, c1)?;
        let v1 = operate::apply(Operator::from_bits(ops >> 2), c2, c3)?;
        let v2 = operate::apply(Operator::from_bits(ops >> 4), v0, v1)?;
        let v3 = operate::apply(Operator::from_bits(ops >> 6), v2, c4)?;
        if v3 != self.target {
            return None;
        }

        let n0 = Node::operation(ops, Node::Value(c0), Node::Value(c1));
        let n1 = Node::operation(ops >> 2, Node::Value(c2), Node::Value(c3));
        let n2 = Node::operation(ops >> 4, n0, n1);
        Some(Node::operation(ops >> 6, n2, Node::Value(c4)))
    }

    /// Shape 2: `(((c0 o0 c1) o1 c2) o2 c3) o3 c4`.
    fn left_chain(&self, ops: u32, c0: i32, c1: i32, c2: i32, c3: i32, c4: i32) -> Option<Node> {
        let v0 = operate::apply(Operator::from_bits(ops), c0, c1)?;
        let v1 = operate::apply(Operator::from_bits(ops >> 2), v0, c2)?;
        let v2 = operate::apply(Operator::from_bits(ops >> 4), v1, c3)?;
        let v3 = operate::apply(Operator::from_bits(ops >> 6), v2, c4)?;
        if v3 != self.target {
            return None;
        }

        let n0 = Node::operation(ops, Node::Value(c0), Node::Value(c1));
        let n1 = Node::operation(ops >> 2, n0, Node::Value(c2));
        let n2 = Node::operation(ops >> 4, n1, Node::Value(c3));
        Some(Node::operation(ops >> 6, n2, Node::Value(c4)))
    }
}

impl Iterator for FiveCardSolver {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        while self.cursor < self.mutations {
            let m = self.cursor;
            self.cursor += 1;
            if let Some(node) = self.attempt(m) {
                return Some(node);
            }
        }
        None
    }
}
