use crate::node::Node;
use crate::operate::{self, Operator};
use crate::solver::permutations;

/// Lazy enumerator over every four-card candidate: 24 slot orders times
/// two tree shapes times 4^3 operator assignments. The shape lives in the
/// low bit of the mutation word, the operator codes above it.
pub struct FourCardSolver {
    target: i32,
    cards: [i32; 4],
    cursor: u32,
}

impl FourCardSolver {
    const MUTATIONS: u32 = 64 * 2 * 24;

    pub(crate) fn new(target: i32, cards: [i32; 4]) -> Self {
        Self {
            target,
            cards,
            cursor: 0,
        }
    }

    fn attempt(&self, m: u32) -> Option<Node> {
        let (mutation, index) = (m / 24, (m % 24) as usize);
        let p = permutations::FOUR[index];
        let c0 = self.cards[p[0]];
        let c1 = self.cards[p[1]];
        let c2 = self.cards[p[2]];
        let c3 = self.cards[p[3]];

        if mutation & 1 == 0 {
            self.left_chain(mutation >> 1, c0, c1, c2, c3)
        } else {
            self.balanced(mutation >> 1, c0, c1, c2, c3)
        }
    }

    /// Shape 0: `((c0 o0 c1) o1 c2) o2 c3`.
    fn left_chain(&self, ops: u32, c0: i32, c1: i32, c2: i32, c3: i32) -> Option<Node> {
        let v0 = operate::apply(Operator::from_bits(ops), c0, c1)?;
        let v1 = operate::apply(Operator::from_bits(ops >> 2), v0, c2)?;
        let v2 = operate::apply(Operator::from_bits(ops >> 4), v1, c3)?;
        if v2 != self.target {
            return None;
        }

        let n0 = Node::operation(ops, Node::Value(c0), Node::Value(c1));
        let n1 = Node::operation(ops >> 2, n0, Node::Value(c2));
        Some(Node::operation(ops >> 4, n1, Node::Value(c3)))
    }

    /// Shape 1: `(c0 o0 c1) o2 (c2 o1 c3)`.
    fn balanced(&self, ops: u32, c0: i32, c1: i32, c2: i32, c3: i32) -> Option<Node> {
        let v0 = operate::apply(Operator::from_bits(ops), c0, c1)?;
        let v1 = operate::apply(Operator::from_bits(ops >> 2), c2, c3)?;
        let v2 = operate::apply(Operator::from_bits(ops >> 4), v0, v1)?;
        if v2 != self.target {
            return None;
        }

        let n0 = Node::operation(ops, Node::Value(c0), Node::Value(c1));
        let n1 = Node::operation(ops >> 2, Node::Value(c2), Node::Value(c3));
        Some(Node::operation(ops >> 4, n0, n1))
    }
}

impl Iterator for FourCardSolver {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        while self.cursor < Self::MUTATIONS {
            let m = self.cursor;
            self.cursor += 1;
            if let Some(node) = self.attempt(m) {
                return Some(node);
            }
        }
        None
    }
}
