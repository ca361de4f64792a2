use crate::operate::Operator;

/// An expression tree over the cards of a single puzzle.
///
/// The variant set is closed and matched exhaustively everywhere. There is
/// deliberately no `Subtract` variant: subtraction is normalized to
/// `Addition(left, Negation(right))` at construction time, so the two
/// commutative variants plus `Division` and `Negation` cover every legal
/// expression.
///
/// Structural equality and hashing are derived over the variant and its
/// ordered children; after [`Node::simplify`] the children of commutative
/// variants are canonically sorted, so structural equality coincides with
/// mathematical equality for deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Value(i32),
    Addition(Vec<Node>),
    Multiplication(Vec<Node>),
    /// Invariant: the numerator's value is an exact, non-zero multiple of
    /// the denominator's. Guaranteed by the solver's construction path,
    /// never re-checked here.
    Division(Box<Node>, Box<Node>),
    Negation(Box<Node>),
}

impl Node {
    /// Builds the node for one internal operator slot from its 2-bit code.
    pub fn operation(bits: u32, left: Node, right: Node) -> Node {
        match Operator::from_bits(bits) {
            Operator::Multiply => Node::Multiplication(vec![left, right]),
            Operator::Divide => Node::Division(Box::new(left), Box::new(right)),
            Operator::Add => Node::Addition(vec![left, right]),
            Operator::Subtract => {
                Node::Addition(vec![left, Node::Negation(Box::new(right))])
            }
        }
    }
}
