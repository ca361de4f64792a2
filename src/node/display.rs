use std::fmt;

use crate::node::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Value(value) => write!(f, "{}", value),
            Node::Addition(nodes) => {
                let joined = nodes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" + ");
                // "(4 + -2)" reads as "(4 - 2)".
                write!(f, "({})", joined.replace("+ -", "- "))
            }
            Node::Multiplication(nodes) => {
                let joined = nodes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" * ");
                write!(f, "({})", joined)
            }
            Node::Division(numerator, denominator) => {
                write!(f, "({} / {})", numerator, denominator)
            }
            Node::Negation(node) => write!(f, "-{}", node),
        }
    }
}
