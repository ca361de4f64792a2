use crate::node::Node;
use crate::operate::{self, Operator};
use crate::solver::permutations;

/// Lazy enumerator over every three-card candidate: 6 slot orders times
/// 4^2 operator assignments on the single tree shape.
pub struct ThreeCardSolver {
    target: i32,
    cards: [i32; 3],
    cursor: u32,
}

impl ThreeCardSolver {
    const MUTATIONS: u32 = 16 * 1 * 6;

    pub(crate) fn new(target: i32, cards: [i32; 3]) -> Self {
        Self {
            target,
            cards,
            cursor: 0,
        }
    }

    /// The one shape: `(c0 o0 c1) o1 c2`.
    fn attempt(&self, m: u32) -> Option<Node> {
        let (mutation, index) = (m / 6, (m % 6) as usize);
        let p = permutations::THREE[index];
        let c0 = self.cards[p[0]];
        let c1 = self.cards[p[1]];
        let c2 = self.cards[p[2]];

        let v0 = operate::apply(Operator::from_bits(mutation), c0, c1)?;
        let v1 = operate::apply(Operator::from_bits(mutation >> 2), v0, c2)?;
        if v1 != self.target {
            return None;
        }

        let n0 = Node::operation(mutation, Node::Value(c0), Node::Value(c1));
        Some(Node::operation(mutation >> 2, n0, Node::Value(c2)))
    }
}

impl Iterator for ThreeCardSolver {
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
