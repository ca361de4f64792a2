use crate::node::Node;

impl Node {
    /// The integer this tree represents, by structural recursion.
    ///
    /// Division uses plain integer division; exactness and a non-zero
    /// denominator hold by construction.
    pub fn value(&self) -> i32 {
        match self {
            Node::Value(value) => *value,
            Node::Addition(nodes) => nodes.iter().map(Node::value).sum(),
            Node::Multiplication(nodes) => nodes.iter().map(Node::value).product(),
            Node::Division(numerator, denominator) => {
                numerator.value() / denominator.value()
            }
            Node::Negation(node) => -node.value(),
        }
    }

    /// Total node count, used to order a solution set for presentation.
    pub fn complexity(&self) -> usize {
        match self {
            Node::Value(_) => 1,
            Node::Addition(nodes) | Node::Multiplication(nodes) => {
                1 + nodes.iter().map(Node::complexity).sum::<usize>()
            }
            Node::Division(numerator, denominator) => {
                1 + numerator.complexity() + denominator.complexity()
            }
            Node::Negation(node) => 1 + node.complexity(),
        }
    }
}
